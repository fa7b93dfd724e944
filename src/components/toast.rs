use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="bx-toast" role="status" onclick={onclick}>
            {message}
            <style>
                {r#"
                .bx-toast {
                    position: fixed;
                    left: 50%;
                    bottom: 2rem;
                    transform: translateX(-50%);
                    z-index: 70;
                    padding: 0.75rem 1.25rem;
                    border-radius: 9999px;
                    background: var(--bx-foreground);
                    color: var(--bx-background);
                    font-size: 0.875rem;
                    font-weight: 500;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                    animation: bx-toast-in 0.3s ease-out;
                    cursor: pointer;
                }
                @keyframes bx-toast-in {
                    from { opacity: 0; transform: translate(-50%, 1rem); }
                    to { opacity: 1; transform: translate(-50%, 0); }
                }
                "#}
            </style>
        </div>
    }
}
