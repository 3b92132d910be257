//! Project showcase. Scrolls normally; no boundary navigation.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;

use crate::components::magnifier::ImageMagnifier;
use crate::components::starfield::Starfield;
use crate::state::nav::Section;
use crate::util::section_nav::use_section_navigator;

const SHOOTING_STARS: usize = 6;

/// One showcase card.
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Screenshot shown in the magnifier; cards without one show `gradient`.
    pub image: Option<&'static str>,
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub gradient: &'static str,
}

impl Project {
    /// Inline background for the preview area.
    #[must_use]
    pub fn preview_background(&self) -> &'static str {
        if self.image.is_some() { "transparent" } else { self.gradient }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Todo-List",
        subtitle: "Integrated Task Management System",
        description: "A full-stack task management application with secure JWT authentication, complete CRUD \
                      operations, and a dashboard featuring productivity analytics with Recharts. Users can manage \
                      tasks with advanced filtering by status and enjoy a responsive UI with smooth animations.",
        tech: &["Next.js", "TypeScript", "Express.js", "PostgreSQL", "Prisma", "TailwindCSS", "JWT"],
        image: Some("/assets/img/todo-list.png"),
        live_url: "https://7sadakonr-todo-list.vercel.app",
        github_url: "https://github.com/7sadakonr/Todo-List",
        gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    },
    Project {
        title: "Portfolio Website",
        subtitle: "Personal Portfolio & Showcase",
        description: "The site you are looking at: a client-rendered single-page app with star-field \
                      backgrounds, a custom cursor, and gesture-driven section navigation.",
        tech: &["React", "CSS", "Framer Motion", "Vite"],
        image: None,
        live_url: "#",
        github_url: "#",
        gradient: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    },
];

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-preview" style=format!("background: {};", project.preview_background())>
                {project.image.map(|src| view! { <ImageMagnifier src=src alt=project.title/> })}
            </div>
            <div class="project-info">
                <div class="project-header">
                    <span class="project-subtitle">{project.subtitle}</span>
                    <h3 class="project-title">{project.title}</h3>
                </div>
                <p class="project-description">{project.description}</p>
                <div class="project-tech">
                    <span class="tech-label">"Tech Stack"</span>
                    <div class="tech-badges">
                        {project.tech.iter().map(|&tech| view! { <span class="tech-badge">{tech}</span> }).collect_view()}
                    </div>
                </div>
                <div class="project-actions">
                    <a href=project.live_url class="project-btn primary" target="_blank" rel="noopener noreferrer">
                        <svg
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <circle cx="12" cy="12" r="10"></circle>
                            <polygon points="10 8 16 12 10 16 10 8"></polygon>
                        </svg>
                        "Live Demo"
                    </a>
                    <a href=project.github_url class="project-btn secondary" target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    use_section_navigator(Section::Project);

    view! {
        <div class="project-page-wrapper">
            <div class="project-bg"></div>
            <Starfield class="project-star-layer"/>
            <div class="project-shooting-stars" aria-hidden="true">
                {(0..SHOOTING_STARS).map(|_| view! { <div class="shooting-star"></div> }).collect_view()}
            </div>
            <div class="project-mesh"></div>
            <div class="project-mesh-extra"></div>
            <div class="project-floor-glow"></div>
            <div class="project-vignette"></div>

            <div class="project-content">
                <section class="project-hero">
                    <h1 class="project-hero-title">
                        "My "
                        <span class="gradient-text">
                            <span class="gradient-text-glow">"Projects"</span>
                            <span class="gradient-text-content">"Projects"</span>
                        </span>
                    </h1>
                    <p class="project-hero-subtitle">
                        "Explore my latest work showcasing creativity, technical skills, and passion for building \
                         meaningful digital experiences."
                    </p>
                </section>
                <section class="projects-section">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </section>
            </div>
        </div>
    }
}
