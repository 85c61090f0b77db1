//! Expandable F.A.Q. list

use leptos::*;

use crate::config::Faqs;

#[component]
pub fn FaqSection(faqs: Option<Faqs>) -> impl IntoView {
    let (expanded_index, set_expanded_index) = create_signal(None::<usize>);

    faqs.filter(|f| !f.questions.is_empty()).map(|faqs| {
        view! {
            <section class="faq-container">
                <h2 class="heading-md">{faqs.title}</h2>
                {faqs
                    .questions
                    .into_iter()
                    .enumerate()
                    .map(|(idx, question)| {
                        let is_expanded = move || expanded_index.get() == Some(idx);
                        let toggle = move |_| {
                            set_expanded_index.update(|current| {
                                *current = if *current == Some(idx) { None } else { Some(idx) };
                            });
                        };
                        view! {
                            <div class="faq-item" class:expanded=is_expanded>
                                <div class="faq-question" on:click=toggle style="cursor: pointer;">
                                    {move || if is_expanded() { "▼ " } else { "▶ " }}
                                    {question.title}
                                </div>
                                <Show when=is_expanded fallback=|| view! {}>
                                    <p class="faq-answer body-sm">{question.description.clone()}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        }
    })
}
