use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::content;
use crate::counter::{CounterAnimation, Precision, VisibilityLatch};
use crate::hooks::use_in_view;

// Close enough to one repaint per frame without tying the loop to the
// compositor.
const FRAME_INTERVAL_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: f64,
    #[prop_or(2000)]
    pub duration_ms: u32,
    pub precision: Precision,
    #[prop_or("")]
    pub suffix: &'static str,
    pub visible: bool,
}

/// Counts up from zero once its host scrolls into view. The run fires at
/// most once per mount; later visibility reports are ignored.
#[function_component(AnimatedCounter)]
fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let display = use_state(|| 0.0f64);
    let latch = use_mut_ref(VisibilityLatch::default);
    let running = use_state(|| false);
    let finished = use_state(|| false);

    {
        let running = running.clone();
        use_effect_with_deps(
            move |&visible: &bool| {
                if latch.borrow_mut().observe(visible) {
                    running.set(true);
                }
                || ()
            },
            props.visible,
        );
    }

    // The frame loop lives while the run does. Completion flips the
    // dependency, which drops the interval; so does unmounting, so a
    // late tick can never touch freed state.
    {
        let deps = (
            *running && !*finished,
            props.value,
            props.duration_ms,
            props.precision,
        );
        let display = display.clone();
        let finished = finished.clone();
        use_effect_with_deps(
            move |&(live, value, duration_ms, precision): &(bool, f64, u32, Precision)| {
                let interval = live.then(|| {
                    let anim = CounterAnimation::new(value, duration_ms, precision)
                        .expect("statistic animation duration must be positive");
                    let started_at = Date::now();
                    Interval::new(FRAME_INTERVAL_MS, move || {
                        let elapsed = Date::now() - started_at;
                        display.set(anim.value_at(elapsed));
                        if anim.is_complete(elapsed) {
                            finished.set(true);
                        }
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    html! {
        <div class="stat-number">
            { props.precision.format(*display) }{ props.suffix }
        </div>
    }
}

#[function_component(BrewProcessSection)]
pub fn brew_process_section() -> Html {
    let steps_ref = use_node_ref();
    let steps_visible = use_in_view(steps_ref.clone());
    let stats_ref = use_node_ref();
    let stats_visible = use_in_view(stats_ref.clone());

    html! {
        <section id="brew-process" class="brew-section">
            <div class="brew-content">
                <h2 class="brew-heading">{"Our Signature Brew Process"}</h2>

                <div
                    ref={steps_ref}
                    class={classes!("brew-steps", steps_visible.then(|| "visible"))}
                >
                    {
                        content::BREW_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <div
                                key={step.title}
                                class="brew-step reveal"
                                style={format!("transition-delay: {}ms", 200 + index * 200)}
                            >
                                <div class="step-icon">
                                    <img src={step.icon} alt={step.title} loading="lazy" />
                                </div>
                                <div class="step-number">{ index + 1 }</div>
                                <h3>{ step.title }</h3>
                                <p>{ step.description }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div
                    ref={stats_ref}
                    class={classes!("brew-stats", stats_visible.then(|| "visible"))}
                >
                    {
                        content::STATISTICS.iter().enumerate().map(|(index, stat)| {
                            let duration_ms = 2000 + 200 * index as u32;
                            html! {
                                <div key={stat.label} class={classes!("stat", stat.tone, "reveal")}>
                                    <AnimatedCounter
                                        value={stat.value}
                                        {duration_ms}
                                        precision={stat.precision}
                                        suffix={stat.suffix}
                                        visible={stats_visible}
                                    />
                                    <div class="stat-label">{ stat.label }</div>
                                    <div class="stat-rule"></div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .brew-section {
                    padding: 6rem 1.5rem;
                    background: #fff;
                    overflow: hidden;
                }
                .brew-content {
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .brew-heading {
                    margin: 0 0 4rem;
                    text-align: center;
                    font-size: clamp(2rem, 4.5vw, 3.4rem);
                    color: #2b1d15;
                }
                .brew-steps {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2.5rem;
                    margin-bottom: 5rem;
                }
                .brew-steps .reveal, .brew-stats .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .brew-steps.visible .reveal, .brew-stats.visible .reveal {
                    opacity: 1;
                    transform: translateY(0);
                }
                .brew-step {
                    position: relative;
                    text-align: center;
                }
                .brew-step:hover {
                    transform: translateY(-10px) !important;
                }
                .step-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 5.5rem;
                    height: 5.5rem;
                    margin-bottom: 1.4rem;
                }
                .step-icon img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .step-number {
                    position: absolute;
                    top: -0.5rem;
                    right: 22%;
                    width: 2.6rem;
                    height: 2.6rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #fff;
                    border: 4px solid #ffd8bd;
                    color: #e8590c;
                    font-weight: 700;
                    box-shadow: 0 8px 18px rgba(60, 42, 33, 0.15);
                }
                .brew-step h3 {
                    margin: 0 0 0.8rem;
                    font-size: 1.3rem;
                    color: #2b1d15;
                }
                .brew-step p {
                    margin: 0 auto;
                    max-width: 22rem;
                    color: #6b5b4f;
                    line-height: 1.7;
                }
                .brew-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2.5rem;
                }
                .stat {
                    text-align: center;
                }
                .stat-number {
                    font-size: clamp(2.4rem, 5vw, 4rem);
                    font-weight: 700;
                    margin-bottom: 0.4rem;
                    transition: transform 0.3s ease;
                }
                .stat:hover .stat-number {
                    transform: scale(1.1);
                }
                .stat-orange .stat-number { color: #e8590c; }
                .stat-red .stat-number { color: #e03131; }
                .stat-label {
                    color: #4b3a30;
                    font-weight: 500;
                    font-size: 0.95rem;
                }
                .stat-rule {
                    width: 3rem;
                    height: 0.25rem;
                    margin: 0.8rem auto 0;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #ffa94d, #ff6b6b);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .stat:hover .stat-rule {
                    opacity: 1;
                }
                @media (max-width: 950px) {
                    .brew-steps {
                        grid-template-columns: 1fr;
                    }
                    .brew-stats {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
