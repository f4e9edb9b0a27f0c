use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::{Slideshow, AUTOPLAY_INTERVAL_MS};
use crate::content;

pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
    ToggleAutoplay,
    Tick,
}

impl Reducible for Slideshow {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.advance_next(),
            CarouselAction::Previous => next.advance_previous(),
            CarouselAction::GoTo(index) => {
                if let Err(err) = next.go_to(index) {
                    warn!("ignoring carousel jump: {err}");
                }
            }
            CarouselAction::ToggleAutoplay => next.toggle_autoplay(),
            CarouselAction::Tick => next.tick(),
        }
        Rc::new(next)
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let slideshow = use_reducer(|| {
        Slideshow::new(content::HERO_SLIDES.len()).expect("hero carousel needs at least one slide")
    });

    // The autoplay timer lives and dies with the flag: re-armed when it
    // flips back on, dropped (cancelled) when it goes off or the section
    // unmounts.
    {
        let autoplay = slideshow.autoplay_enabled();
        let slideshow = slideshow.clone();
        use_effect_with_deps(
            move |&enabled: &bool| {
                let interval = enabled.then(|| {
                    Interval::new(AUTOPLAY_INTERVAL_MS, move || {
                        slideshow.dispatch(CarouselAction::Tick);
                    })
                });
                move || drop(interval)
            },
            autoplay,
        );
    }

    let on_previous = {
        let slideshow = slideshow.clone();
        Callback::from(move |_: MouseEvent| slideshow.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let slideshow = slideshow.clone();
        Callback::from(move |_: MouseEvent| slideshow.dispatch(CarouselAction::Next))
    };
    let on_toggle_autoplay = {
        let slideshow = slideshow.clone();
        Callback::from(move |_: MouseEvent| slideshow.dispatch(CarouselAction::ToggleAutoplay))
    };

    let current = slideshow.current_index();
    let slide = &content::HERO_SLIDES[current];

    html! {
        <section id="top" class="hero-section">
            <div class={classes!("hero-backdrop", slide.theme)}></div>

            <div class="hero-grid">
                <div key={current} class="hero-copy">
                    <div class="hero-badge">{ slide.glyph.symbol() }</div>
                    <h1 class="hero-title">
                        <span>{ slide.title }</span>
                        <span class="hero-subtitle">{ slide.subtitle }</span>
                    </h1>
                    <p class="hero-description">{ slide.description }</p>
                    <div class="hero-cta-group">
                        <a href={slide.cta_href} class="hero-cta">{ slide.cta_text }</a>
                        <a href={slide.secondary_href} class="hero-cta-secondary">
                            { slide.secondary_text }
                        </a>
                    </div>
                </div>

                <div class="hero-stage">
                    <div class="hero-frame">
                        {
                            content::HERO_SLIDES.iter().enumerate().map(|(index, slide)| html! {
                                <div
                                    key={index}
                                    class={classes!(
                                        "hero-visual",
                                        slide.theme,
                                        (index == current).then(|| "visible"),
                                    )}
                                >
                                    <span class="hero-glyph">{ slide.glyph.symbol() }</span>
                                    <img src={slide.image} alt={slide.title} loading="lazy" />
                                </div>
                            }).collect::<Html>()
                        }

                        <button class="hero-arrow left" onclick={on_previous}>{"‹"}</button>
                        <button class="hero-arrow right" onclick={on_next}>{"›"}</button>
                    </div>

                    <div class="hero-indicators">
                        {
                            content::HERO_SLIDES.iter().enumerate().map(|(index, _)| {
                                let onclick = {
                                    let slideshow = slideshow.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        slideshow.dispatch(CarouselAction::GoTo(index));
                                    })
                                };
                                html! {
                                    <button
                                        key={index}
                                        {onclick}
                                        class={classes!(
                                            "indicator",
                                            (index == current).then(|| "active"),
                                        )}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <button class="autoplay-toggle" onclick={on_toggle_autoplay}>
                        <span class={classes!(
                            "autoplay-dot",
                            slideshow.autoplay_enabled().then(|| "on"),
                        )} />
                        {
                            if slideshow.autoplay_enabled() {
                                "Auto-playing"
                            } else {
                                "Paused"
                            }
                        }
                    </button>
                </div>
            </div>

            <div class="scroll-hint">
                <div class="scroll-mouse"><div class="scroll-wheel"></div></div>
            </div>

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #fff7f0, #fdeee6);
                    padding: 6rem 1.5rem 4rem;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    opacity: 0.18;
                    transition: background 1s ease;
                }
                .theme-sunrise {
                    background: linear-gradient(135deg, #ffa94d, #ff6b6b, #f783ac);
                }
                .theme-grove {
                    background: linear-gradient(135deg, #69db7c, #38d9a9, #3bc9db);
                }
                .theme-dusk {
                    background: linear-gradient(135deg, #b197fc, #845ef7, #5c7cfa);
                }
                .hero-grid {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy {
                    animation: riseIn 0.6s ease-out;
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    font-size: 2rem;
                    border-radius: 1.2rem;
                    background: linear-gradient(135deg, #ffa94d, #e03131);
                    box-shadow: 0 12px 24px rgba(224, 49, 49, 0.25);
                    margin-bottom: 1.5rem;
                }
                .hero-title {
                    margin: 0 0 1rem;
                    font-size: clamp(2.2rem, 5vw, 4rem);
                    line-height: 1.15;
                    color: #2b1d15;
                }
                .hero-title span {
                    display: block;
                }
                .hero-subtitle {
                    background: linear-gradient(90deg, #f76707, #e03131, #d6336c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-description {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: #6b5b4f;
                    max-width: 34rem;
                    margin-bottom: 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-cta {
                    padding: 0.9rem 2.2rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #f76707, #e03131);
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 12px 28px rgba(224, 49, 49, 0.3);
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                }
                .hero-cta-secondary {
                    padding: 0.9rem 2.2rem;
                    border-radius: 999px;
                    border: 2px solid #ffc9a3;
                    color: #e8590c;
                    font-weight: 600;
                    text-decoration: none;
                    transition: border-color 0.3s ease, background 0.3s ease;
                }
                .hero-cta-secondary:hover {
                    border-color: #ffa94d;
                    background: #fff4ec;
                }
                .hero-stage {
                    text-align: center;
                }
                .hero-frame {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    max-width: 30rem;
                    margin: 0 auto;
                    border-radius: 1.8rem;
                    overflow: hidden;
                    box-shadow: 0 24px 48px rgba(60, 42, 33, 0.25);
                }
                .hero-visual {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transform: scale(1.06);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .hero-visual.visible {
                    opacity: 1;
                    transform: scale(1);
                }
                .hero-glyph {
                    font-size: 5rem;
                    margin-bottom: 1rem;
                    opacity: 0.85;
                }
                .hero-visual img {
                    max-width: 60%;
                    height: auto;
                }
                .hero-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 2.8rem;
                    height: 2.8rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.85);
                    color: #4b3a30;
                    font-size: 1.6rem;
                    line-height: 1;
                    cursor: pointer;
                    box-shadow: 0 6px 16px rgba(60, 42, 33, 0.2);
                    transition: transform 0.3s ease, color 0.3s ease;
                }
                .hero-arrow:hover {
                    transform: translateY(-50%) scale(1.1);
                    color: #e8590c;
                }
                .hero-arrow.left { left: 0.8rem; }
                .hero-arrow.right { right: 0.8rem; }
                .hero-indicators {
                    display: flex;
                    justify-content: center;
                    gap: 0.7rem;
                    margin-top: 1.8rem;
                }
                .indicator {
                    width: 0.7rem;
                    height: 0.7rem;
                    border: none;
                    border-radius: 999px;
                    background: #e3d5ca;
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .indicator:hover {
                    background: #ffc9a3;
                }
                .indicator.active {
                    width: 2rem;
                    background: #f76707;
                }
                .autoplay-toggle {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                    padding: 0.4rem 1rem;
                    border: none;
                    border-radius: 999px;
                    background: none;
                    color: #6b5b4f;
                    font-size: 0.9rem;
                    cursor: pointer;
                }
                .autoplay-toggle:hover {
                    color: #e8590c;
                }
                .autoplay-dot {
                    width: 0.55rem;
                    height: 0.55rem;
                    border-radius: 50%;
                    background: #cbb9ac;
                }
                .autoplay-dot.on {
                    background: #37b24d;
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                }
                .scroll-mouse {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid #b9a79a;
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                }
                .scroll-wheel {
                    width: 0.25rem;
                    height: 0.75rem;
                    margin-top: 0.5rem;
                    border-radius: 999px;
                    background: #f76707;
                    animation: wheelBob 2s ease-in-out infinite;
                }
                @keyframes wheelBob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
                @media (max-width: 950px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }
                    .hero-copy {
                        order: 2;
                    }
                    .hero-stage {
                        order: 1;
                    }
                    .hero-description {
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .hero-cta-group {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
