use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal_after;

#[function_component(InstructionText)]
pub fn instruction_text() -> Html {
    let is_visible = use_reveal_after(config::INSTRUCTION_REVEAL_DELAY_MS);

    html! {
        <div class={classes!("bx-instruction", "bx-fade", is_visible.then(|| "visible"))}>
            <span class="bx-instruction-arrow">{"↑"}</span>
            <p>{"위에서 카테고리를 선택해주세요"}</p>
            <style>
                {r#"
                .bx-instruction {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem 0;
                    font-size: 0.875rem;
                    color: var(--bx-muted-foreground);
                }
                .bx-instruction-arrow {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                    animation: bx-bounce 1s infinite;
                }
                @keyframes bx-bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
