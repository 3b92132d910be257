//! About page: intro, skills, education timeline, and contact links.
//!
//! Wheel or swipe past the top returns to Home; past the bottom continues to
//! Project.

use leptos::prelude::*;

use crate::components::starfield::Starfield;
use crate::state::nav::Section;
use crate::util::section_nav::use_section_navigator;

const RESUME_HREF: &str = "/assets/resume.pdf";
const RESUME_FILE_NAME: &str = "Jetsadakorn_Resume.pdf";
const SHOOTING_STARS: usize = 8;

const SKILLS: &[&str] = &["HTML", "CSS", "JavaScript", "React", "Figma"];

struct Education {
    period: &'static str,
    title: &'static str,
    school: &'static str,
    description: &'static str,
}

const EDUCATION: &[Education] = &[
    Education {
        period: "2023 - Present",
        title: "Bachelor of Science in Computer Science",
        school: "Ragamangala University of Technology Suvarnabhumi Huntra",
        description: "Studying computer science fundamentals, software engineering, data structures, \
                      algorithms, and modern development practices.",
    },
    Education {
        period: "2020 - 2022",
        title: "Vocational certificate in Information Technology",
        school: "Ayutthaya Technological Commercial College",
        description: "Focused on practical IT skills, including hardware maintenance, software \
                      troubleshooting, and basic web development.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let transition = use_section_navigator(Section::About);
    let wrapper_class = move || match transition.get() {
        Some(direction) => format!("about-page-wrapper {}", direction.class()),
        None => "about-page-wrapper".to_owned(),
    };

    view! {
        <div class=wrapper_class>
            <div class="about-bg"></div>
            <Starfield class="about-star-layer"/>
            <div class="about-shooting-stars" aria-hidden="true">
                {(0..SHOOTING_STARS).map(|_| view! { <div class="shooting-star"></div> }).collect_view()}
            </div>
            <div class="about-mesh"></div>
            <div class="about-mesh-extra"></div>
            <div class="about-floor-glow"></div>
            <div class="about-vignette"></div>

            <div class="about-content">
                <section class="about-hero">
                    <h1 class="about-hero-title">
                        "Hi, I'm "
                        <span class="gradient-text">
                            <span class="gradient-text-glow">"Jetsadakorn"</span>
                            <span class="gradient-text-content">"Jetsadakorn"</span>
                        </span>
                    </h1>
                    <p class="about-hero-subtitle">
                        "A passionate Computer Science Student exploring the intersection of technology and creativity. \
                         Currently focused on web development, UI/UX design, and building meaningful digital experiences."
                    </p>
                    <a class="resume-button" href=RESUME_HREF download=RESUME_FILE_NAME>
                        <svg
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3"></path>
                        </svg>
                        "Download Resume"
                    </a>
                </section>

                <section class="about-section">
                    <h2 class="section-title">"About Me"</h2>
                    <div class="glass-card">
                        <div class="about-me-content">
                            <div class="about-me-text">
                                <p>
                                    "I'm a "
                                    <span class="highlight-text">"Computer Science student"</span>
                                    " with a deep passion for creating elegant solutions to complex problems. \
                                     My journey in tech started with curiosity about how things work, and has \
                                     evolved into a commitment to building"
                                    <span class="gradient-highlight">" innovative digital experiences"</span>
                                    "."
                                </p>
                                <p>
                                    "When I'm not coding, you can find me exploring new design trends, learning \
                                     about emerging technologies, or working on personal projects that challenge \
                                     me to grow. I believe in the power of continuous learning and pushing boundaries."
                                </p>
                                <p>
                                    "Currently, I'm focused on "
                                    <span class="highlight-text">"full-stack web development"</span>
                                    " and creating user-centric interfaces that are both beautiful and functional."
                                </p>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="about-section">
                    <h2 class="section-title">"Skills"</h2>
                    <div class="skills-list">
                        {SKILLS
                            .iter()
                            .map(|&skill| {
                                let logo = format!("/assets/img/skills/{}.svg", skill.to_lowercase());
                                view! {
                                    <div class="skill-item">
                                        <img class="skill-logo" src=logo alt="" loading="lazy"/>
                                        <span>{skill}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="about-section">
                    <h2 class="section-title">"Education"</h2>
                    <div class="glass-card">
                        <div class="timeline">
                            {EDUCATION
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <div class="timeline-item">
                                            <div class="timeline-date">{entry.period}</div>
                                            <div class="timeline-title">{entry.title}</div>
                                            <div class="timeline-subtitle">{entry.school}</div>
                                            <div class="timeline-description">{entry.description}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <section id="contact" class="contact-section about-section">
                    <h2 class="section-title">"Let's Connect"</h2>
                    <p class="about-hero-subtitle about-hero-subtitle--flush">
                        "I'm always open to new opportunities, collaborations, and conversations."
                    </p>
                    <div class="contact-links">
                        <a href="mailto:7sadakonr@gmail.com" class="contact-link">
                            "Email"
                        </a>
                        <a href="https://github.com/7sadakonr" target="_blank" rel="noopener noreferrer" class="contact-link">
                            "GitHub"
                        </a>
                    </div>
                </section>
            </div>
        </div>
    }
}
