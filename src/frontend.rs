mod dom;
mod sections;

use serde_json::json;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

use crate::config::PageConfig;
use crate::content::Portfolio;
use crate::count_up::CountUp;
use crate::scroll::{ScrollState, ScrollTracker, SectionId};
use crate::telemetry::{log_event, LogLevel};
use crate::theme::{Theme, ThemePreference};
use crate::typewriter::Typewriter;

use dom::{BrowserStore, VisibilityObserver};
use gloo_render::request_animation_frame;
use gloo_timers::callback::Timeout;

fn log(config: &PageConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    log_event(config.log_level, level, event, fields);
}

#[hook]
fn use_page_config() -> Rc<PageConfig> {
    use_context::<Rc<PageConfig>>().unwrap_or_default()
}

#[derive(Clone, PartialEq)]
struct ThemeContext {
    theme: Theme,
    toggle: Callback<()>,
}

#[hook]
fn use_scroll_state(config: &PageConfig) -> ScrollState {
    let state = use_state_eq(ScrollState::default);
    let tracker = ScrollTracker::new(config.scroll_lookahead_px, config.nav_elevation_px);

    {
        let state = state.clone();
        use_effect_with(tracker, move |tracker| {
            let tracker = *tracker;
            let update = move || state.set(tracker.update(dom::scroll_metrics(), dom::section_offset));

            update();
            let listener = dom::on_window("scroll", move |_| update());

            move || drop(listener)
        });
    }

    *state
}

#[derive(Clone, PartialEq)]
struct TypingState {
    writer: Typewriter,
    delay_ms: u32,
    step: u64,
}

enum TypingAction {
    Tick,
}

impl Reducible for TypingState {
    type Action = TypingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypingAction::Tick => {
                let mut writer = self.writer.clone();
                let delay_ms = writer.tick();
                Rc::new(Self {
                    writer,
                    delay_ms,
                    step: self.step + 1,
                })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct TypingTextProps {
    roles: Vec<String>,
}

#[function_component(TypingText)]
fn typing_text(props: &TypingTextProps) -> Html {
    let config = use_page_config();
    let state = {
        let roles = props.roles.clone();
        let (speed_ms, pause_ms) = (config.typing_speed_ms, config.typing_pause_ms);
        use_reducer_eq(move || {
            let writer = Typewriter::new(roles, speed_ms, pause_ms);
            TypingState {
                delay_ms: writer.initial_delay_ms(),
                writer,
                step: 0,
            }
        })
    };

    {
        let dispatcher = state.dispatcher();
        use_effect_with((state.step, state.delay_ms), move |&(_, delay_ms)| {
            let pending =
                Timeout::new(delay_ms, move || dispatcher.dispatch(TypingAction::Tick));
            move || drop(pending)
        });
    }

    html! {
        <span class="typing-text">
            {state.writer.text().to_string()}
            <span class="typing-caret" aria-hidden="true">{"|"}</span>
        </span>
    }
}

#[derive(Clone, PartialEq)]
struct CounterState {
    counter: CountUp,
    frame: u64,
}

enum CounterAction {
    Visible,
    Frame(f64),
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut counter = self.counter.clone();

        match action {
            CounterAction::Visible => {
                if !counter.trigger() {
                    return self;
                }
                Rc::new(Self {
                    counter,
                    frame: self.frame,
                })
            }
            CounterAction::Frame(now_ms) => {
                counter.advance(now_ms);
                Rc::new(Self {
                    counter,
                    frame: self.frame + 1,
                })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    value: AttrValue,
}

#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let config = use_page_config();
    let node = use_node_ref();
    let state = {
        let value = props.value.clone();
        let duration_ms = config.count_up_duration_ms;
        use_reducer_eq(move || CounterState {
            counter: CountUp::new(&value, duration_ms),
            frame: 0,
        })
    };

    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        let threshold = config.count_up_visibility;
        use_effect_with((), move |_| {
            let observer = node.cast::<web_sys::Element>().and_then(|element| {
                let dispatcher = dispatcher.clone();
                VisibilityObserver::observe(&element, threshold, move || {
                    dispatcher.dispatch(CounterAction::Visible)
                })
            });

            if observer.is_none() {
                dispatcher.dispatch(CounterAction::Visible);
            }

            move || drop(observer)
        });
    }

    {
        let dispatcher = state.dispatcher();
        let running = state.counter.is_triggered() && !state.counter.is_finished();
        use_effect_with((running, state.frame), move |&(running, _)| {
            let pending = running.then(|| {
                request_animation_frame(move |now_ms| {
                    dispatcher.dispatch(CounterAction::Frame(now_ms))
                })
            });
            move || drop(pending)
        });
    }

    html! {
        <span ref={node} class="counter">{state.counter.display()}</span>
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    onclick: Callback<MouseEvent>,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            onclick={props.onclick.clone()}
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let Some(context) = use_context::<ThemeContext>() else {
        return Html::default();
    };

    let onclick = {
        let toggle = context.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={context.theme.toggle_label()}
            aria-pressed={context.theme.is_dark().to_string()}
            onclick={onclick}
        >
            <span aria-hidden="true">{context.theme.icon()}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ScrollProgressProps {
    progress: f64,
}

#[function_component(ScrollProgress)]
fn scroll_progress(props: &ScrollProgressProps) -> Html {
    let style = format!("transform: scaleX({:.4});", props.progress);

    html! {
        <div class="scroll-progress" role="progressbar"
            aria-valuemin="0" aria-valuemax="100"
            aria-valuenow={format!("{:.0}", props.progress * 100.0)}>
            <div class="scroll-progress-bar" style={style} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavigationProps {
    brand: AttrValue,
    scroll: ScrollState,
}

#[function_component(Navigation)]
fn navigation(props: &NavigationProps) -> Html {
    let menu_open = use_state(|| false);

    let nav_button = |section: SectionId, mobile: bool| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            dom::scroll_to_section(section);
            menu_open.set(false);
        });
        let active = props.scroll.active == Some(section);

        html! {
            <button
                key={section.as_str()}
                type="button"
                class={classes!(
                    "nav-item",
                    mobile.then_some("nav-item-mobile"),
                    active.then_some("is-active"),
                )}
                aria-current={active.then_some("true")}
                onclick={onclick}
            >
                {section.nav_label()}
            </button>
        }
    };

    let on_brand = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            dom::scroll_to_section(SectionId::Landing);
            menu_open.set(false);
        })
    };

    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class={classes!("site-nav", props.scroll.elevated.then_some("is-elevated"))}>
            <div class="nav-bar">
                <button type="button" class="nav-brand" onclick={on_brand}>
                    <span class="nav-brand-name">{props.brand.clone()}</span>
                    <span class="nav-brand-caption">{"Portfolio"}</span>
                </button>

                <div class="nav-desktop">
                    {for SectionId::NAVIGABLE.iter().map(|section| nav_button(*section, false))}
                    <ThemeToggle />
                </div>

                <div class="nav-mobile-controls">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="nav-menu-button"
                        aria-expanded={menu_open.to_string()}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        onclick={on_menu}
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class="nav-mobile-menu">
                    {for SectionId::NAVIGABLE.iter().map(|section| nav_button(*section, true))}
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct PageChromeProps {
    brand: AttrValue,
}

/// Progress bar and navigation; the only parts that re-render on scroll.
#[function_component(PageChrome)]
fn page_chrome(props: &PageChromeProps) -> Html {
    let config = use_page_config();
    let scroll = use_scroll_state(&config);

    {
        let config = config.clone();
        use_effect_with(scroll.active, move |active| {
            if let Some(section) = active {
                log(
                    &config,
                    LogLevel::Debug,
                    "section_active",
                    json!({ "section": section.as_str() }),
                );
            }
            || ()
        });
    }

    html! {
        <>
            <ScrollProgress progress={scroll.progress} />
            <Navigation brand={props.brand.clone()} scroll={scroll} />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| PageConfig::from_build_env());
    let content = use_memo((), |_| Portfolio::load().map(Rc::new));
    let preference = use_mut_ref(|| {
        ThemePreference::resolve(BrowserStore::detect(), dom::system_prefers_dark())
    });
    let initial_theme = preference.borrow().theme();
    let theme = use_state(|| initial_theme);

    {
        let config = config.clone();
        let source = preference.borrow().source();
        use_effect_with((), move |_| {
            dom::apply_theme(initial_theme);
            log(
                &config,
                LogLevel::Info,
                "theme_resolved",
                json!({ "theme": initial_theme.as_str(), "source": source.as_str() }),
            );
            || ()
        });
    }

    {
        let config = config.clone();
        let content = content.clone();
        use_effect_with((), move |_| {
            if let Err(error) = content.as_ref() {
                log(
                    &config,
                    LogLevel::Warn,
                    "content_invalid",
                    json!({ "error": error.to_string() }),
                );
            }
            || ()
        });
    }

    let on_toggle = {
        let config = config.clone();
        let preference = preference.clone();
        let theme = theme.clone();
        use_callback((), move |_: (), _| {
            let next = preference.borrow_mut().toggle();
            dom::apply_theme_with_transition(next);
            theme.set(next);
            log(
                &config,
                LogLevel::Info,
                "theme_toggled",
                json!({ "theme": next.as_str() }),
            );
        })
    };

    let theme_context = ThemeContext {
        theme: *theme,
        toggle: on_toggle,
    };

    let body = match content.as_ref() {
        Ok(portfolio) => html! {
            <>
                <PageChrome brand={AttrValue::from(portfolio.profile.name.clone())} />
                <main id="content">
                    <sections::Landing content={portfolio.clone()} />
                    <sections::About content={portfolio.clone()} />
                    <sections::Internships content={portfolio.clone()} />
                    <sections::Skills content={portfolio.clone()} />
                    <sections::Projects content={portfolio.clone()} />
                    <sections::UiDesigns content={portfolio.clone()} />
                    <sections::Contact content={portfolio.clone()} />
                </main>
            </>
        },
        Err(_) => html! {
            <>
                <PageChrome brand="Portfolio" />
                <main id="content" class="content-unavailable">
                    <p>{"This portfolio could not be loaded. Please try again later."}</p>
                </main>
            </>
        },
    };

    html! {
        <ContextProvider<Rc<PageConfig>> context={config}>
            <ContextProvider<ThemeContext> context={theme_context}>
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                <div class="page-shell">
                    {body}
                </div>
            </ContextProvider<ThemeContext>>
        </ContextProvider<Rc<PageConfig>>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
