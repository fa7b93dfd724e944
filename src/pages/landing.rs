use std::rc::Rc;

use yew::prelude::*;
use log::{debug, error, info, warn};

use crate::browser;
use crate::catalog::Catalog;
use crate::components::{
    category_cards::CategoryCards,
    code_modal::CodeModal,
    content_grid::ContentGrid,
    footer_cta::FooterCta,
    header::Header,
    hero::Hero,
    instruction_text::InstructionText,
    toast::Toast,
};
use crate::gate::{self, ClickAction, PromptTarget, SubmitOutcome};
use crate::hooks::use_notifier;
use crate::models::Category;
use crate::session::{SessionAction, SessionState};

const INVALID_CODE_MESSAGE: &str = "코드가 올바르지 않습니다.";

#[function_component(Landing)]
pub fn landing() -> Html {
    let catalog = use_state(|| match Catalog::load() {
        Ok(catalog) => {
            info!("Loaded catalog with {} items", catalog.items().len());
            Some(Rc::new(catalog))
        }
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            None
        }
    });
    let session = use_reducer(|| SessionState::new(browser::prefers_dark_scheme()));
    let prompt = use_state(|| None::<PromptTarget>);
    let notifier = use_notifier();

    {
        let dark_mode = session.dark_mode();
        use_effect_with_deps(
            move |dark_mode| {
                browser::apply_dark_mode(*dark_mode);
                || ()
            },
            dark_mode,
        );
    }

    let on_toggle_dark_mode = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::ToggleDarkMode))
    };

    let on_master_unlock = {
        let prompt = prompt.clone();
        Callback::from(move |_| prompt.set(Some(PromptTarget::Master)))
    };

    let on_select_category = {
        let session = session.clone();
        Callback::from(move |category: Category| {
            debug!("Category clicked: {}", category.as_str());
            session.dispatch(SessionAction::SelectCategory(category));
        })
    };

    let on_item_click = {
        let session = session.clone();
        let prompt = prompt.clone();
        let catalog = (*catalog).clone();
        Callback::from(move |item_id: String| {
            let Some(item) = catalog.as_ref().and_then(|c| c.item(&item_id)) else {
                warn!("Clicked unknown item {}", item_id);
                return;
            };
            match gate::click_action(item, &*session) {
                ClickAction::Navigate(link) => browser::open_in_new_tab(&link),
                ClickAction::PromptCode => prompt.set(Some(PromptTarget::Item(item_id))),
                ClickAction::Ignore => {}
            }
        })
    };

    let on_prompt_close = {
        let prompt = prompt.clone();
        Callback::from(move |_| prompt.set(None))
    };

    let on_code_submit = {
        let session = session.clone();
        let prompt = prompt.clone();
        let notifier = notifier.clone();
        let catalog = (*catalog).clone();
        Callback::from(move |code: String| {
            let (Some(target), Some(catalog)) = ((*prompt).clone(), catalog.as_ref()) else {
                return;
            };
            match gate::submit_code(catalog, &target, &code) {
                SubmitOutcome::Unlocked { action, message } => {
                    info!("Code accepted for {:?}", target);
                    session.dispatch(action);
                    notifier.notify(message);
                    prompt.set(None);
                }
                SubmitOutcome::Rejected => {
                    debug!("Rejected code for {:?}", target);
                    browser::alert(INVALID_CODE_MESSAGE);
                }
                SubmitOutcome::UnknownItem => {
                    warn!("Code submitted for unknown target {:?}", target);
                    prompt.set(None);
                }
            }
        })
    };

    let on_toast_dismiss = {
        let notifier = notifier.clone();
        Callback::from(move |_| notifier.dismiss())
    };

    let selected_category = session.selected_category();

    html! {
        <div class="bx-page">
            <Header
                is_dark_mode={session.dark_mode()}
                all_unlocked={session.all_unlocked()}
                on_toggle_dark_mode={on_toggle_dark_mode}
                on_master_unlock={on_master_unlock}
            />

            <main class="bx-main">
                <Hero />
                {
                    match &*catalog {
                        Some(catalog) => html! {
                            <>
                                <CategoryCards
                                    categories={catalog.categories().to_vec()}
                                    selected_category={selected_category}
                                    on_select_category={on_select_category}
                                />
                                {
                                    if selected_category.is_none() {
                                        html! { <InstructionText /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <ContentGrid
                                    catalog={catalog.clone()}
                                    category={selected_category}
                                    session={(*session).clone()}
                                    on_item_click={on_item_click}
                                />
                            </>
                        },
                        None => html! {
                            <p class="bx-catalog-error">{"콘텐츠를 불러오지 못했습니다. 잠시 후 다시 시도해주세요."}</p>
                        },
                    }
                }
                <FooterCta />
            </main>

            <CodeModal
                is_open={prompt.is_some()}
                is_master_unlock={matches!(*prompt, Some(PromptTarget::Master))}
                on_close={on_prompt_close}
                on_submit={on_code_submit}
            />
            <Toast message={notifier.message()} on_dismiss={on_toast_dismiss} />

            <style>
                {r#"
                :root {
                    --bx-background: #ffffff;
                    --bx-background-translucent: rgba(255, 255, 255, 0.8);
                    --bx-foreground: #111111;
                    --bx-card: #ffffff;
                    --bx-border: #e5e7eb;
                    --bx-muted: #f3f4f6;
                    --bx-muted-foreground: #6b7280;
                    --bx-highlight-purple: #c4b5fd;
                    --bx-highlight-mint: #a7f3d0;
                }
                .dark {
                    --bx-background: #0f0f12;
                    --bx-background-translucent: rgba(15, 15, 18, 0.8);
                    --bx-foreground: #f5f5f5;
                    --bx-card: #18181b;
                    --bx-border: #27272a;
                    --bx-muted: #27272a;
                    --bx-muted-foreground: #a1a1aa;
                    --bx-highlight-purple: rgba(139, 92, 246, 0.8);
                    --bx-highlight-mint: rgba(16, 185, 129, 0.8);
                }
                body {
                    margin: 0;
                    font-family: Pretendard, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                }
                .bx-page {
                    min-height: 100vh;
                    background: var(--bx-background);
                    color: var(--bx-foreground);
                    transition: background-color 0.3s, color 0.3s;
                }
                .bx-main {
                    padding-bottom: 4rem;
                }
                .bx-fade {
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                }
                .bx-fade.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .bx-catalog-error {
                    text-align: center;
                    color: var(--bx-muted-foreground);
                    padding: 2rem 1rem;
                }
                "#}
            </style>
        </div>
    }
}
