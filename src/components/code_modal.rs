use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct CodeModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<String>,
    #[prop_or_default]
    pub is_master_unlock: bool,
}

#[function_component(CodeModal)]
pub fn code_modal(props: &CodeModalProps) -> Html {
    let code = use_state(String::new);

    if !props.is_open {
        return html! {};
    }

    // Input is cleared after every submission, right or wrong.
    let submit = {
        let code = code.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: ()| {
            on_submit.emit((*code).clone());
            code.set(String::new());
        })
    };

    let oninput = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    let onkeypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let on_submit_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if props.is_master_unlock { "전체 잠금 해제" } else { "코드 입력" };

    html! {
        <div class="bx-modal">
            <div class="bx-modal-backdrop" onclick={on_close_click.clone()}></div>
            <div class="bx-modal-panel">
                <button class="bx-modal-close" aria-label="Close" onclick={on_close_click}>{"✕"}</button>

                <div class="bx-modal-title">
                    <span>{"🔒"}</span>
                    <h2>{title}</h2>
                </div>

                <input
                    type="text"
                    class="bx-modal-input"
                    value={(*code).clone()}
                    oninput={oninput}
                    onkeypress={onkeypress}
                    placeholder="코드를 입력하세요"
                    autofocus={true}
                />

                <button class="bx-modal-submit" onclick={on_submit_click}>{"확인"}</button>

                <div class="bx-modal-footer">
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                        {"📷 아직 공개 전입니다"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .bx-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .bx-modal-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                }
                .bx-modal-panel {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--bx-background);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .bx-modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: none;
                    color: var(--bx-muted-foreground);
                    cursor: pointer;
                }
                .bx-modal-title {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                    font-size: 1.25rem;
                }
                .bx-modal-title h2 {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .bx-modal-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: var(--bx-muted);
                    color: var(--bx-foreground);
                    font-size: 1rem;
                }
                .bx-modal-input:focus {
                    outline: 2px solid var(--bx-highlight-purple);
                }
                .bx-modal-submit {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: var(--bx-highlight-purple);
                    color: white;
                    font-weight: 500;
                    cursor: pointer;
                }
                .bx-modal-submit:hover {
                    filter: brightness(1.1);
                }
                .bx-modal-footer {
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--bx-border);
                    text-align: center;
                    font-size: 0.875rem;
                }
                .bx-modal-footer a {
                    color: var(--bx-muted-foreground);
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
