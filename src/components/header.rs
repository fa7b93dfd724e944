use yew::prelude::*;
use web_sys::MouseEvent;

const MENU_ITEMS: &[(&str, &str)] = &[
    ("묣 콘텐츠", "BX-KIT"),
    ("풀버전", "유료예정"),
    ("브랜딩 클래스", "출시예정"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub is_dark_mode: bool,
    pub all_unlocked: bool,
    pub on_toggle_dark_mode: Callback<()>,
    pub on_master_unlock: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let dropdown_open = use_state(|| false);

    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dropdown_open.set(!*dropdown_open);
        })
    };

    let close_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            dropdown_open.set(false);
        })
    };

    let on_lock_click = {
        let on_master_unlock = props.on_master_unlock.clone();
        Callback::from(move |_: MouseEvent| on_master_unlock.emit(()))
    };

    let on_theme_click = {
        let on_toggle_dark_mode = props.on_toggle_dark_mode.clone();
        Callback::from(move |_: MouseEvent| on_toggle_dark_mode.emit(()))
    };

    let theme_label = if props.is_dark_mode {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <header class="bx-header">
            <div class="bx-logo">{"beautyX"}</div>

            <div class="bx-dropdown">
                <button class="bx-dropdown-trigger" onclick={toggle_dropdown}>
                    {"Category"}
                    <span class={classes!("bx-chevron", (*dropdown_open).then(|| "open"))}>{"⌄"}</span>
                </button>
                {
                    if *dropdown_open {
                        html! {
                            <div class="bx-dropdown-content">
                                { for MENU_ITEMS.iter().map(|(label, sublabel)| html! {
                                    <button class="bx-dropdown-item" onclick={close_dropdown.clone()}>
                                        <span class="bx-dropdown-label">{*label}</span>
                                        <span class="bx-dropdown-sublabel">{*sublabel}</span>
                                    </button>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="bx-header-icons">
                <button class="bx-icon-button" aria-label="Lock" onclick={on_lock_click}>
                    { if props.all_unlocked { "🔓" } else { "🔒" } }
                </button>
                <button class="bx-icon-button" aria-label={theme_label} onclick={on_theme_click}>
                    { if props.is_dark_mode { "☀️" } else { "🌙" } }
                </button>
            </div>

            <style>
                {r#"
                .bx-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1.5rem;
                    background: var(--bx-background-translucent);
                    backdrop-filter: blur(4px);
                    transition: background-color 0.3s;
                }
                .bx-logo {
                    font-family: Pretendard, sans-serif;
                    font-weight: 700;
                    font-size: 1.125rem;
                    letter-spacing: -0.01em;
                }
                .bx-dropdown {
                    position: relative;
                }
                .bx-dropdown-trigger {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    background: none;
                    border: none;
                    color: var(--bx-foreground);
                    cursor: pointer;
                }
                .bx-chevron {
                    display: inline-block;
                    transition: transform 0.2s;
                }
                .bx-chevron.open {
                    transform: rotate(180deg);
                }
                .bx-dropdown-content {
                    position: absolute;
                    top: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    min-width: 180px;
                    padding: 0.25rem;
                    border-radius: 0.75rem;
                    background: var(--bx-card);
                    border: 1px solid var(--bx-border);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                }
                .bx-dropdown-item {
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    padding: 0.5rem 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: none;
                    color: var(--bx-foreground);
                    cursor: pointer;
                }
                .bx-dropdown-item:hover {
                    background: var(--bx-muted);
                }
                .bx-dropdown-label {
                    font-weight: 500;
                }
                .bx-dropdown-sublabel {
                    font-size: 0.75rem;
                    color: var(--bx-muted-foreground);
                }
                .bx-header-icons {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .bx-icon-button {
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: none;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .bx-icon-button:hover {
                    background: var(--bx-muted);
                }
                "#}
            </style>
        </header>
    }
}
