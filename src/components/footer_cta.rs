use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal_after;

#[function_component(FooterCta)]
pub fn footer_cta() -> Html {
    let is_visible = use_reveal_after(config::FOOTER_REVEAL_DELAY_MS);

    html! {
        <section class="bx-footer">
            <div class={classes!("bx-footer-inner", "bx-fade", is_visible.then(|| "visible"))}>
                <p class="bx-footer-text">
                    {"릴스에서 "}<strong>{"묣 코드"}</strong>{"를 받아보세요!"}
                </p>
                <a
                    class="bx-instagram-button"
                    href={config::INSTAGRAM_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"📷 "}{config::INSTAGRAM_HANDLE}
                </a>
            </div>
            <style>
                {r#"
                .bx-footer {
                    padding: 4rem 1rem;
                }
                .bx-footer-inner {
                    max-width: 28rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .bx-footer-text {
                    font-weight: 500;
                    margin-bottom: 1rem;
                }
                .bx-instagram-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, var(--bx-highlight-purple), var(--bx-highlight-mint));
                    color: var(--bx-foreground);
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: transform 0.3s, filter 0.3s;
                }
                .bx-instagram-button:hover {
                    filter: brightness(1.1);
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}
