//! Landing page: background, star layer, and the hero call to action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use motion::device::DeviceProfile;

use crate::components::optimized_image::OptimizedImage;
use crate::components::starfield::Starfield;
use crate::state::nav::Section;
use crate::util::section_nav::use_section_navigator;

#[component]
pub fn HomePage() -> impl IntoView {
    use_section_navigator(Section::Home);
    let device = expect_context::<DeviceProfile>();
    let hero = device.hero_asset("/assets/img/hero.svg", "/assets/img/hero.png");

    let navigate = use_navigate();
    let on_explore = move |_| navigate(Section::About.path(), NavigateOptions::default());

    view! {
        <main>
            <div class="home">
                <div class="home-bg"></div>
                <div class="home-blur"></div>
                <div class="home-overlay"></div>
                <Starfield class="home-stars"/>
                <section class="hero-section">
                    <div class="hero-content">
                        <h1 class="main-title">
                            "Welcome to my "
                            <span class="gradient-text">
                                <span class="gradient-text-glow">"portfolio"</span>
                                <span class="gradient-text-content">"portfolio"</span>
                            </span>
                        </h1>
                        <p class="subtitle">"Hi, I'm Jetsadakonr Muangwichit, a Computer Science Student."</p>
                    </div>
                    <OptimizedImage src=hero alt="Hero" class="hero-image" priority=true/>
                    <button class="explore-button" on:click=on_explore>
                        <span class="explore-text">"Explore"</span>
                        <div class="explore-icon">
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path
                                    d="M5 12H19"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                ></path>
                                <path
                                    d="M12 5L19 12L12 19"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                ></path>
                            </svg>
                        </div>
                    </button>
                </section>
            </div>
        </main>
    }
}
