use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::Catalog;
use crate::config;
use crate::hooks::use_reveal_on_change;
use crate::models::{Category, ContentItem};
use crate::presenter::{self, Affordance};
use crate::session::SessionState;

#[derive(Properties, PartialEq)]
pub struct ContentGridProps {
    pub catalog: Rc<Catalog>,
    pub category: Option<Category>,
    pub session: SessionState,
    pub on_item_click: Callback<String>,
}

#[function_component(ContentGrid)]
pub fn content_grid(props: &ContentGridProps) -> Html {
    // Every selection change hides the grid and restarts the staggered reveal.
    let is_visible = use_reveal_on_change(config::GRID_REVEAL_DELAY_MS, props.category);

    if props.category.is_none() {
        return html! {};
    }

    let items = presenter::filter_by_category(props.catalog.items(), props.category);

    html! {
        <section class="bx-content">
            <div class="bx-content-grid">
                { for items.into_iter().enumerate().map(|(index, item)| {
                    render_card(props, item, index, is_visible)
                }) }
            </div>
            <style>
                {r#"
                .bx-content {
                    padding: 2rem 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .bx-content-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .bx-content-card {
                    position: relative;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--bx-border);
                    background: var(--bx-card);
                    cursor: pointer;
                }
                .bx-content-card:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .bx-kit-label {
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: var(--bx-muted-foreground);
                    margin-bottom: 0.75rem;
                }
                .bx-content-title {
                    font-size: 1.125rem;
                    font-weight: 700;
                    line-height: 1.3;
                    margin-bottom: 0.5rem;
                }
                .bx-content-description {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: var(--bx-muted-foreground);
                    margin-bottom: 1rem;
                }
                .bx-content-card.locked .bx-content-description {
                    filter: blur(4px);
                    user-select: none;
                }
                .bx-lock-badge {
                    position: absolute;
                    top: 1.25rem;
                    right: 1.25rem;
                    font-size: 1.1rem;
                }
                .bx-open-link {
                    position: absolute;
                    top: 1.25rem;
                    right: 1.25rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: var(--bx-foreground);
                }
                .bx-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: var(--bx-muted-foreground);
                }
                @media (max-width: 768px) {
                    .bx-content-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

fn render_card(props: &ContentGridProps, item: &ContentItem, index: usize, is_visible: bool) -> Html {
    let affordance = presenter::affordance(item, &props.session);
    let onclick = {
        let on_item_click = props.on_item_click.clone();
        let item_id = item.id.clone();
        Callback::from(move |_: MouseEvent| on_item_click.emit(item_id.clone()))
    };
    let delay = if is_visible { index as u32 * config::GRID_STAGGER_MS } else { 0 };

    html! {
        <div
            key={item.id.clone()}
            class={classes!(
                "bx-content-card",
                "bx-fade",
                is_visible.then(|| "visible"),
                (affordance == Affordance::Obscured).then(|| "locked")
            )}
            style={format!("transition-delay: {}ms;", delay)}
            role="button"
            onclick={onclick}
        >
            <div class="bx-kit-label">{presenter::item_label(item)}</div>
            {
                match affordance {
                    Affordance::Obscured => html! { <span class="bx-lock-badge">{"🔒"}</span> },
                    Affordance::Open => html! { <span class="bx-open-link">{"열기 →"}</span> },
                    Affordance::Plain => html! {},
                }
            }
            <h3 class="bx-content-title">{&item.title}</h3>
            <p class="bx-content-description">{&item.description}</p>
            <div class="bx-tags">
                { for item.tags.iter().map(|tag| html! { <span>{format!("#{}", tag)}</span> }) }
            </div>
        </div>
    }
}
