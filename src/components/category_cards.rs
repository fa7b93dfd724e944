use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal_after;
use crate::models::{Category, CategoryConfig};

#[derive(Properties, PartialEq)]
pub struct CategoryCardsProps {
    pub categories: Vec<CategoryConfig>,
    pub selected_category: Option<Category>,
    pub on_select_category: Callback<Category>,
}

#[function_component(CategoryCards)]
pub fn category_cards(props: &CategoryCardsProps) -> Html {
    let is_visible = use_reveal_after(config::CATEGORY_REVEAL_DELAY_MS);

    html! {
        <section class="bx-categories">
            <div class="bx-category-grid">
                { for props.categories.iter().enumerate().map(|(index, category)| {
                    let id = category.id;
                    let onclick = {
                        let on_select_category = props.on_select_category.clone();
                        Callback::from(move |_: MouseEvent| on_select_category.emit(id))
                    };
                    let is_selected = props.selected_category == Some(id);
                    let delay = if is_visible { index as u32 * config::CATEGORY_STAGGER_MS } else { 0 };
                    let style = format!(
                        "background: {}; color: {}; transition-delay: {}ms;",
                        category.bg_color, category.color, delay
                    );

                    html! {
                        <button
                            key={id.as_str()}
                            class={classes!(
                                "bx-category-card",
                                "bx-fade",
                                is_visible.then(|| "visible"),
                                is_selected.then(|| "selected")
                            )}
                            style={style}
                            onclick={onclick}
                        >
                            <div class="bx-category-dot"></div>
                            <span class="bx-category-label">{&category.label}</span>
                            <span class="bx-category-sublabel">{&category.sublabel}</span>
                        </button>
                    }
                }) }
            </div>
            <style>
                {r#"
                .bx-categories {
                    padding: 2rem 1rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .bx-category-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .bx-category-card {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    border: none;
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                }
                .bx-category-card:hover {
                    transform: scale(1.03);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12);
                }
                .bx-category-card:active {
                    transform: scale(0.98);
                }
                .bx-category-card.selected {
                    box-shadow: 0 0 0 2px var(--bx-background), 0 0 0 6px rgba(255, 255, 255, 0.5);
                }
                .bx-category-dot {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.8);
                }
                .bx-category-label {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .bx-category-sublabel {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.2);
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                @media (max-width: 640px) {
                    .bx-category-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
