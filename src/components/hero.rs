use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal_after;

#[function_component(Hero)]
pub fn hero() -> Html {
    let is_visible = use_reveal_after(config::HERO_REVEAL_DELAY_MS);
    let fade = classes!("bx-fade", is_visible.then(|| "visible"));

    html! {
        <section class="bx-hero">
            <p class={classes!(fade.clone(), "bx-hero-subtitle")}>
                {"beautyX: Beauty Content Marketing"}
            </p>
            <h1 class="bx-hero-title">
                <span class={classes!(fade.clone(), "bx-hero-line", "delay-1")}>
                    {"콘텐츠가 "}
                    <span class="bx-highlight purple">{"매출"}</span>
                    {"이 되는"}
                </span>
                <span class={classes!(fade, "bx-hero-line", "delay-2")}>
                    {"뷰티샵의 마케팅 "}
                    <span class="bx-highlight mint">{"공식"}</span>
                </span>
            </h1>
            <style>
                {r#"
                .bx-hero {
                    padding: 6rem 1rem 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .bx-hero-subtitle {
                    font-size: 0.875rem;
                    color: var(--bx-muted-foreground);
                    margin-bottom: 1.5rem;
                }
                .bx-hero-title {
                    font-size: clamp(1.875rem, 5vw, 3rem);
                    font-weight: 800;
                    line-height: 1.25;
                    letter-spacing: -0.02em;
                }
                .bx-hero-line {
                    display: block;
                    margin-bottom: 0.5rem;
                }
                .bx-hero-line.delay-1 {
                    transition-delay: 100ms;
                }
                .bx-hero-line.delay-2 {
                    transition-delay: 200ms;
                }
                .bx-highlight {
                    display: inline-block;
                    padding: 0.125rem 0.5rem;
                    border-radius: 0.5rem;
                }
                .bx-highlight.purple {
                    background: var(--bx-highlight-purple);
                }
                .bx-highlight.mint {
                    background: var(--bx-highlight-mint);
                }
                "#}
            </style>
        </section>
    }
}
