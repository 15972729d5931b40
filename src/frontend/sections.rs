use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use super::dom;
use super::{log, use_page_config, Counter, ExternalLink, TypingText};
use crate::content::{Internship, Portfolio, Project, SocialKind, SocialLink};
use crate::expandable::ExpandableList;
use crate::media::{DesignOverlay, ImageStatus};
use crate::period::format_period;
use crate::scroll::SectionId;
use crate::telemetry::LogLevel;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: Rc<Portfolio>,
}

fn section_header(title: &str, subtitle: Option<&str>) -> Html {
    html! {
        <header class="section-header">
            <h2>{title.to_string()}</h2>
            <div class="section-rule" aria-hidden="true" />
            if let Some(subtitle) = subtitle {
                <p class="section-subtitle">{subtitle.to_string()}</p>
            }
        </header>
    }
}

fn social_glyph(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::Email => "✉",
        SocialKind::Github => "⌥",
        SocialKind::Linkedin => "in",
    }
}

fn social_anchor(link: &SocialLink, class: &'static str) -> Html {
    let glyph = html! { <span aria-hidden="true">{social_glyph(link.kind)}</span> };

    if link.kind.opens_new_tab() {
        html! {
            <a class={class} href={link.url.clone()} target="_blank" rel="noopener noreferrer"
                aria-label={link.label.clone()}>
                {glyph}
            </a>
        }
    } else {
        html! {
            <a class={class} href={link.url.clone()} aria-label={link.label.clone()}>
                {glyph}
            </a>
        }
    }
}

#[derive(Properties, PartialEq)]
struct CardImageProps {
    src: AttrValue,
    alt: AttrValue,
}

/// Image with a spinner while loading and a placeholder if it fails.
#[function_component(CardImage)]
fn card_image(props: &CardImageProps) -> Html {
    let config = use_page_config();
    let status = use_state(ImageStatus::default);

    let onload = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(status.on_load()))
    };

    let onerror = {
        let status = status.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            status.set(status.on_error());
            log(
                &config,
                LogLevel::Debug,
                "image_unavailable",
                json!({ "src": src.as_str() }),
            );
        })
    };

    html! {
        <div class={classes!("card-image", status.as_str())}>
            if status.shows_skeleton() {
                <div class="card-image-skeleton" aria-hidden="true">
                    <span class="spinner" />
                </div>
            }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                onload={onload}
                onerror={onerror}
            />
            if status.shows_fallback() {
                <div class="card-image-fallback">
                    <p>{"Image unavailable"}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing(props: &SectionProps) -> Html {
    let config = use_page_config();
    let profile = &props.content.profile;

    let on_view_work = Callback::from(|_: MouseEvent| dom::scroll_to_section(SectionId::Projects));

    let on_download = {
        let resume = profile.resume.clone();
        Callback::from(move |_: MouseEvent| {
            let started =
                dom::download_file(&resume.href, &resume.file_name, config.resume_cleanup_ms)
                    .is_some();
            log(
                &config,
                LogLevel::Info,
                "resume_download",
                json!({ "file": resume.file_name.as_str(), "started": started }),
            );
        })
    };

    let on_scroll_hint = Callback::from(|_: MouseEvent| dom::scroll_to_section(SectionId::About));

    html! {
        <section id={SectionId::Landing.as_str()} class="landing">
            <div class="landing-grid">
                <div class="landing-photo">
                    <img src={profile.photo.clone()} alt={profile.name.clone()} />
                </div>
                <div class="landing-card">
                    <h1 class="landing-name">{profile.name.clone()}</h1>
                    <p class="landing-role">
                        <span>{"I'm a\u{a0}"}</span>
                        <TypingText roles={profile.roles.clone()} />
                    </p>
                    <div class="landing-tagline">
                        {for profile.tagline.iter().map(|line| html! { <p>{line.clone()}</p> })}
                    </div>
                    <div class="landing-actions">
                        <button type="button" class="button-primary" onclick={on_view_work}>
                            {"View My Work"}<span aria-hidden="true">{" →"}</span>
                        </button>
                        <button type="button" class="button-outline" onclick={on_download}>
                            <span aria-hidden="true">{"⤓ "}</span>{"Download Resume"}
                        </button>
                    </div>
                    <div class="landing-social">
                        {for props.content.contact.links.iter().map(|link| social_anchor(link, "social-pill"))}
                    </div>
                </div>
            </div>
            <button type="button" class="scroll-hint" onclick={on_scroll_hint}>
                <span>{"Scroll Down"}</span>
                <span aria-hidden="true">{"⌄"}</span>
            </button>
        </section>
    }
}

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    let about = &props.content.about;

    html! {
        <section id={SectionId::About.as_str()} class="section about">
            {section_header("About Me", None)}

            <div class="stat-grid">
                {for about.stats.iter().map(|stat| html! {
                    <div class="card stat-card">
                        <span class="card-icon" aria-hidden="true">{stat.icon.glyph()}</span>
                        <div class="stat-number">
                            <Counter value={AttrValue::from(stat.number.clone())} />
                        </div>
                        <p class="stat-label">{stat.label.clone()}</p>
                    </div>
                })}
            </div>

            <div class="card about-intro">
                {for about.paragraphs.iter().map(|paragraph| html! {
                    <p>
                        {paragraph.lead.clone()}
                        <strong>{paragraph.emphasis.clone()}</strong>
                        {paragraph.rest.clone()}
                    </p>
                })}
            </div>

            <h3 class="subsection-title">{"Key Strengths"}</h3>
            <div class="highlight-grid">
                {for about.highlights.iter().map(|highlight| html! {
                    <div class="card highlight-card">
                        <span class="card-icon" aria-hidden="true">{highlight.icon.glyph()}</span>
                        <p>{highlight.text.clone()}</p>
                    </div>
                })}
            </div>

            <h3 class="subsection-title">{"Core Expertise"}</h3>
            <div class="expertise-grid">
                {for about.expertise.iter().map(|area| html! {
                    <div class="card expertise-card">
                        <span class="card-icon" aria-hidden="true">{area.icon.glyph()}</span>
                        <h4>{area.title.clone()}</h4>
                    </div>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct InternshipCardProps {
    internship: Internship,
    index: usize,
}

#[function_component(InternshipCard)]
fn internship_card(props: &InternshipCardProps) -> Html {
    let config = use_page_config();
    let threshold = config.skills_threshold;
    let expansion = use_state(move || ExpandableList::new(threshold));
    let internship = &props.internship;

    let on_toggle = {
        let expansion = expansion.clone();
        Callback::from(move |_: MouseEvent| expansion.set(expansion.toggled()))
    };

    let side = if props.index % 2 == 0 { "timeline-left" } else { "timeline-right" };

    html! {
        <article class={classes!("timeline-item", side, internship.is_current.then_some("is-current"))}>
            <span class="timeline-dot" aria-hidden="true" />
            <div class="card internship-card">
                <div class="internship-heading">
                    <h3>{internship.role.clone()}</h3>
                    if internship.is_current {
                        <span class="badge-current">{"✦ Current"}</span>
                    }
                </div>
                <p class="internship-company">{internship.company.clone()}</p>
                <time class="internship-period" datetime={internship.period.clone()}>
                    {format_period(&internship.period)}
                </time>
                <div class="internship-skills">
                    <h4>{"Skills & Technologies"}</h4>
                    <ul class="tag-list">
                        {for expansion.visible(&internship.skills).iter().map(|skill| html! {
                            <li key={format!("{}-{}", internship.id, skill)} class="tag">{skill.clone()}</li>
                        })}
                    </ul>
                    if let Some(label) = expansion.control_label(internship.skills.len()) {
                        <button
                            type="button"
                            class="tag-toggle"
                            aria-expanded={expansion.is_expanded().to_string()}
                            onclick={on_toggle}
                        >
                            {label}
                            <span aria-hidden="true">{if expansion.is_expanded() { " ▴" } else { " ▾" }}</span>
                        </button>
                    }
                </div>
            </div>
        </article>
    }
}

#[function_component(Internships)]
pub fn internships(props: &SectionProps) -> Html {
    html! {
        <section id={SectionId::Internships.as_str()} class="section internships">
            {section_header("Internships", Some("Professional experiences and learning opportunities"))}
            <div class="timeline">
                {for props.content.internships.iter().enumerate().map(|(index, internship)| html! {
                    <InternshipCard key={internship.id.clone()} internship={internship.clone()} index={index} />
                })}
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills(props: &SectionProps) -> Html {
    html! {
        <section id={SectionId::Skills.as_str()} class="section skills">
            {section_header("Skills", Some("A comprehensive collection of technologies and tools I work with"))}
            <div class="skill-grid">
                {for props.content.skill_categories.iter().map(|category| html! {
                    <div class="card skill-card">
                        <div class="skill-card-heading">
                            <span class="card-icon" aria-hidden="true">{category.icon.glyph()}</span>
                            <div>
                                <h3>{category.category.clone()}</h3>
                                <span class="skill-count">{format!("{} Skills", category.skills.len())}</span>
                            </div>
                        </div>
                        <ul class="tag-list">
                            {for category.skills.iter().map(|skill| html! {
                                <li class="tag">{skill.clone()}</li>
                            })}
                        </ul>
                    </div>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <article class="card project-card">
            <CardImage src={project.image.clone()} alt={project.title.clone()} />
            <div class="project-body">
                <h3>{project.title.clone()}</h3>
                <p class="project-description">{project.description.clone()}</p>
                <ul class="tag-list">
                    {for project.tech.iter().map(|tech| html! { <li class="tag">{tech.clone()}</li> })}
                </ul>
                <div class="project-actions">
                    <ExternalLink href={project.code_url.clone()} label="Code" class="button-outline" />
                    <ExternalLink href={project.demo_url.clone()} label="Demo" class="button-primary" />
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects(props: &SectionProps) -> Html {
    html! {
        <section id={SectionId::Projects.as_str()} class="section projects">
            {section_header("Projects", Some("Showcasing innovative solutions and creative implementations"))}
            <div class="project-grid">
                {for props.content.projects.iter().map(|project| html! {
                    <ProjectCard key={project.title.clone()} project={project.clone()} />
                })}
            </div>
        </section>
    }
}

#[function_component(UiDesigns)]
pub fn ui_designs(props: &SectionProps) -> Html {
    let overlay = use_state(DesignOverlay::default);
    let designs = &props.content.designs;

    {
        let overlay = overlay.clone();
        use_effect_with(overlay.is_open(), move |&open| {
            let listener = open
                .then(|| {
                    dom::on_window("keydown", move |event: &Event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|event| event.key() == "Escape");
                        if escape {
                            overlay.set(DesignOverlay::default());
                        }
                    })
                })
                .flatten();
            move || drop(listener)
        });
    }

    let close = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(overlay.close()))
    };

    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    let detail = overlay.selected().and_then(|index| designs.get(index)).map(|design| {
        html! {
            <div class="overlay-backdrop" onclick={close.clone()}>
                <div
                    class="overlay-dialog"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="design-overlay-title"
                    onclick={stop.clone()}
                >
                    <header class="overlay-header">
                        <h3 id="design-overlay-title">{design.title.clone()}</h3>
                        <p>{design.description.clone()}</p>
                        <ExternalLink
                            href={design.portfolio_url.clone()}
                            label="View Full Project on Behance"
                            class="button-ghost"
                        />
                        <button type="button" class="overlay-close" aria-label="Close" onclick={close.clone()}>
                            {"✕"}
                        </button>
                    </header>
                    <img class="overlay-image" src={design.image.clone()} alt={design.title.clone()} />
                </div>
            </div>
        }
    });

    html! {
        <section id={SectionId::UiDesigns.as_str()} class="section ui-designs">
            {section_header(
                "UI/UX Designs",
                Some("Explore my creative UI/UX design projects showcasing modern interfaces and user experiences"),
            )}
            <div class="design-grid">
                {for designs.iter().enumerate().map(|(index, design)| {
                    let open = {
                        let overlay = overlay.clone();
                        let len = designs.len();
                        Callback::from(move |_: MouseEvent| overlay.set(overlay.open(index, len)))
                    };

                    html! {
                        <article key={design.title.clone()} class="card design-card" onclick={open}>
                            <CardImage src={design.image.clone()} alt={design.title.clone()} />
                            <span class="design-category">{design.category.clone()}</span>
                            <ExternalLink
                                href={design.portfolio_url.clone()}
                                label=""
                                class="design-link"
                                onclick={stop.clone()}
                            />
                            <div class="design-body">
                                <h3>{design.title.clone()}</h3>
                                <p>{design.description.clone()}</p>
                            </div>
                        </article>
                    }
                })}
            </div>
            {detail.unwrap_or_default()}
        </section>
    }
}

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    let contact = &props.content.contact;

    html! {
        <section id={SectionId::Contact.as_str()} class="section contact">
            {section_header(&contact.heading, Some(contact.blurb.as_str()))}
            <div class="contact-links">
                {for contact.links.iter().map(|link| social_anchor(link, "card contact-card"))}
            </div>
        </section>
    }
}
