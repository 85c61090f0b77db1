//! Guarded mint submission.
//!
//! The flow only knows the wallet and the chain through the
//! [`TransactionSigner`] and [`TransactionWaiter`] seams, so it runs the same
//! against the browser wallet and against test doubles.

use crate::mint::form::PrescriptionForm;
use crate::mint::payload::{mint_nft, InputTransactionData, MintNftArguments};
use crate::types::AppResult;

/// Transaction accepted by the wallet, not yet confirmed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Signs and submits a transaction on behalf of the connected account.
#[allow(async_fn_in_trait)]
pub trait TransactionSigner {
    async fn sign_and_submit(&self, tx: &InputTransactionData) -> AppResult<PendingTransaction>;
}

/// Waits until a submitted transaction is committed.
#[allow(async_fn_in_trait)]
pub trait TransactionWaiter {
    async fn wait_for_transaction(&self, hash: &str) -> AppResult<()>;
}

/// Everything a submit needs besides the collaborators.
#[derive(Clone, Debug)]
pub struct MintRequest<'a> {
    /// Connected account, if any
    pub account: Option<&'a str>,
    /// Collection to mint into, if known
    pub collection_id: Option<&'a str>,
    pub module_address: &'a str,
    pub amount: u64,
    pub form: &'a PrescriptionForm,
}

/// Why a submit did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoAccount,
    NoCollection,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MintOutcome {
    /// A guard failed; nothing was built or signed.
    Skipped(SkipReason),
    /// Signed, submitted and committed.
    Confirmed { hash: String },
}

/// Sign the mint transaction and wait for it to land.
///
/// Signing and confirmation errors are returned untouched. Feed the result to
/// [`apply_outcome`] to update the page state.
pub async fn submit_mint<S, W>(
    request: MintRequest<'_>,
    signer: &S,
    waiter: &W,
) -> AppResult<MintOutcome>
where
    S: TransactionSigner,
    W: TransactionWaiter,
{
    if request.account.map_or(true, str::is_empty) {
        return Ok(MintOutcome::Skipped(SkipReason::NoAccount));
    }
    let Some(collection_id) = request.collection_id.filter(|id| !id.trim().is_empty()) else {
        return Ok(MintOutcome::Skipped(SkipReason::NoCollection));
    };

    let tx = mint_nft(
        request.module_address,
        MintNftArguments {
            collection_id: collection_id.to_string(),
            amount: request.amount,
            prescription_data: request.form.to_prescription_data()?,
        },
    );

    log::info!("✍️ Requesting signature for {}", tx.data.function);
    let pending = signer.sign_and_submit(&tx).await?;

    log::info!("⏳ Waiting for transaction {}", pending.hash);
    waiter.wait_for_transaction(&pending.hash).await?;

    log::info!("✅ Prescription minted: {}", pending.hash);
    Ok(MintOutcome::Confirmed { hash: pending.hash })
}

/// Apply a submit result to the page state.
///
/// A confirmed mint clears the form and bumps `refresh` so collection data
/// is fetched again. Returns whether anything changed.
pub fn apply_outcome(
    result: &AppResult<MintOutcome>,
    form: &mut PrescriptionForm,
    refresh: &mut u32,
) -> bool {
    match result {
        Ok(MintOutcome::Confirmed { .. }) => {
            form.reset();
            *refresh = refresh.wrapping_add(1);
            true
        }
        Ok(MintOutcome::Skipped(reason)) => {
            log::debug!("Mint skipped: {:?}", reason);
            false
        }
        Err(e) => {
            log::error!("❌ Mint failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mint::form::{AttachedDocument, FormField};
    use crate::types::AppError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockSigner {
        signed: RefCell<Vec<InputTransactionData>>,
        reject: bool,
    }

    impl TransactionSigner for MockSigner {
        async fn sign_and_submit(&self, tx: &InputTransactionData) -> AppResult<PendingTransaction> {
            if self.reject {
                return Err(AppError::Wallet("User rejected the request".into()));
            }
            self.signed.borrow_mut().push(tx.clone());
            Ok(PendingTransaction {
                hash: "0xfeed".into(),
            })
        }
    }

    #[derive(Default)]
    struct MockWaiter {
        waited: RefCell<Vec<String>>,
        fail: bool,
    }

    impl TransactionWaiter for MockWaiter {
        async fn wait_for_transaction(&self, hash: &str) -> AppResult<()> {
            self.waited.borrow_mut().push(hash.to_string());
            if self.fail {
                Err(AppError::Transaction("Move abort".into()))
            } else {
                Ok(())
            }
        }
    }

    fn form() -> PrescriptionForm {
        let mut form = PrescriptionForm::default();
        form.set(FormField::MedicationName, "Metformin");
        form
    }

    fn request<'a>(
        account: Option<&'a str>,
        collection_id: Option<&'a str>,
        form: &'a PrescriptionForm,
    ) -> MintRequest<'a> {
        MintRequest {
            account,
            collection_id,
            module_address: "0xcafe",
            amount: 1,
            form,
        }
    }

    #[test]
    fn test_no_account_skips_signing() {
        let (signer, waiter, form) = (MockSigner::default(), MockWaiter::default(), form());
        let outcome = block_on(submit_mint(request(None, Some("0xc011"), &form), &signer, &waiter));

        assert_eq!(outcome, Ok(MintOutcome::Skipped(SkipReason::NoAccount)));
        assert!(signer.signed.borrow().is_empty());
    }

    #[test]
    fn test_no_collection_skips_signing() {
        let (signer, waiter, form) = (MockSigner::default(), MockWaiter::default(), form());

        for collection in [None, Some(""), Some("   ")] {
            let outcome = block_on(submit_mint(request(Some("0x1"), collection, &form), &signer, &waiter));
            assert_eq!(outcome, Ok(MintOutcome::Skipped(SkipReason::NoCollection)));
        }
        assert!(signer.signed.borrow().is_empty());
        assert!(waiter.waited.borrow().is_empty());
    }

    #[test]
    fn test_confirmed_mint() {
        let (signer, waiter, form) = (MockSigner::default(), MockWaiter::default(), form());
        let outcome = block_on(submit_mint(request(Some("0x1"), Some("0xc011"), &form), &signer, &waiter));

        assert_eq!(outcome, Ok(MintOutcome::Confirmed { hash: "0xfeed".into() }));

        let signed = signer.signed.borrow();
        let args = &signed[0].data.function_arguments;
        assert_eq!(args[0], "0xc011");
        assert_eq!(args[1], 1);
        assert!(args[2].as_str().unwrap().contains("Metformin"));
        assert_eq!(*waiter.waited.borrow(), vec!["0xfeed".to_string()]);
    }

    #[test]
    fn test_signer_error_propagates() {
        let signer = MockSigner {
            reject: true,
            ..Default::default()
        };
        let (waiter, form) = (MockWaiter::default(), form());
        let outcome = block_on(submit_mint(request(Some("0x1"), Some("0xc011"), &form), &signer, &waiter));

        assert!(matches!(outcome, Err(AppError::Wallet(_))));
        assert!(waiter.waited.borrow().is_empty());
    }

    #[test]
    fn test_confirmation_error_propagates() {
        let waiter = MockWaiter {
            fail: true,
            ..Default::default()
        };
        let (signer, form) = (MockSigner::default(), form());
        let outcome = block_on(submit_mint(request(Some("0x1"), Some("0xc011"), &form), &signer, &waiter));

        assert_eq!(outcome, Err(AppError::Transaction("Move abort".into())));
    }

    fn filled_form() -> PrescriptionForm {
        let mut form = PrescriptionForm::default();
        for field in FormField::ALL {
            form.set(field, "x");
        }
        form.attach(Some(AttachedDocument {
            name: "rx.pdf".into(),
            size: 10,
            mime_type: "application/pdf".into(),
        }));
        form
    }

    #[test]
    fn test_confirmed_outcome_resets_form_and_refreshes() {
        let mut form = filled_form();
        let mut refresh = 3;

        let changed = apply_outcome(
            &Ok(MintOutcome::Confirmed { hash: "0xfeed".into() }),
            &mut form,
            &mut refresh,
        );

        assert!(changed);
        assert_eq!(refresh, 4);
        for field in FormField::ALL {
            assert_eq!(form.get(field), "");
        }
        assert!(form.prescription_file.is_none());
    }

    #[test]
    fn test_skipped_or_failed_outcome_keeps_state() {
        let results = [
            Ok(MintOutcome::Skipped(SkipReason::NoAccount)),
            Ok(MintOutcome::Skipped(SkipReason::NoCollection)),
            Err(AppError::Wallet("User rejected the request".into())),
            Err(AppError::Transaction("Move abort".into())),
        ];

        for result in results {
            let mut form = filled_form();
            let mut refresh = 3;

            assert!(!apply_outcome(&result, &mut form, &mut refresh));
            assert_eq!(refresh, 3);
            assert_eq!(form, filled_form());
        }
    }
}
