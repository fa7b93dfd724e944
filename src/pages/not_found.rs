use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="bx-not-found">
            <h1>{"404"}</h1>
            <p>{"페이지를 찾을 수 없습니다."}</p>
            <Link<Route> to={Route::Home} classes="bx-home-link">
                {"beautyX 홈으로 →"}
            </Link<Route>>
            <style>
                {r#"
                .bx-not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: Pretendard, sans-serif;
                    color: #111111;
                }
                .bx-not-found h1 {
                    font-size: 3rem;
                    font-weight: 800;
                    margin: 0;
                }
                .bx-home-link {
                    color: #7c3aed;
                    text-decoration: none;
                    font-weight: 500;
                }
                "#}
            </style>
        </div>
    }
}
