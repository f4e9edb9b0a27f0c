use yew::prelude::*;

use crate::content;
use crate::hooks::use_in_view;

#[function_component(OccasionsSection)]
pub fn occasions_section() -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());

    html! {
        <section
            id="occasions"
            ref={section_ref}
            class={classes!("occasions-section", visible.then(|| "visible"))}
        >
            <div class="occasions-content">
                <h2 class="occasions-heading reveal">{"Your Space for Every Occasion"}</h2>

                <div class="occasions-grid">
                    {
                        content::OCCASIONS.iter().enumerate().map(|(index, occasion)| html! {
                            <div
                                key={occasion.title}
                                class="occasion-card reveal"
                                style={format!("transition-delay: {}ms", 200 + index * 150)}
                            >
                                <div class={classes!("occasion-backdrop", occasion.theme)}></div>
                                <div class="occasion-body">
                                    <div class="occasion-glyph">{ occasion.glyph.symbol() }</div>
                                    <h3>{ occasion.title }</h3>
                                    <p>{ occasion.description }</p>
                                    <ul class="occasion-features">
                                        {
                                            occasion.features.iter().map(|feature| html! {
                                                <li key={*feature}>{ feature }</li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="occasions-dots">
                    <span></span><span></span><span></span>
                </div>
            </div>

            <style>
                {r#"
                .occasions-section {
                    padding: 6rem 1.5rem;
                    background: linear-gradient(135deg, #faf5f0, #fdeee6);
                    overflow: hidden;
                }
                .occasions-content {
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .occasions-section .reveal {
                    opacity: 0;
                    transform: translateY(50px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .occasions-section.visible .reveal {
                    opacity: 1;
                    transform: translateY(0);
                }
                .occasions-heading {
                    margin: 0 0 4rem;
                    text-align: center;
                    font-size: clamp(1.8rem, 4vw, 3rem);
                    color: #2b1d15;
                }
                .occasions-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .occasion-card {
                    position: relative;
                    min-height: 30rem;
                    border-radius: 1.8rem;
                    overflow: hidden;
                    box-shadow: 0 20px 40px rgba(60, 42, 33, 0.22);
                }
                .occasion-card:hover {
                    transform: translateY(-10px) !important;
                }
                .occasion-backdrop {
                    position: absolute;
                    inset: 0;
                    opacity: 0.92;
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
                .occasion-backdrop::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.55), rgba(0, 0, 0, 0.15));
                }
                .occasion-body {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2.2rem;
                    color: #fff;
                }
                .occasion-glyph {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.6rem;
                    height: 3.6rem;
                    font-size: 1.8rem;
                    border-radius: 1.1rem;
                    background: rgba(255, 255, 255, 0.22);
                    backdrop-filter: blur(6px);
                    margin-bottom: 1.2rem;
                }
                .occasion-body h3 {
                    margin: 0 0 0.8rem;
                    font-size: 1.4rem;
                }
                .occasion-body p {
                    margin: 0 0 1.2rem;
                    font-size: 0.95rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.9);
                }
                .occasion-features {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .occasion-features li {
                    font-size: 0.88rem;
                    color: rgba(255, 255, 255, 0.82);
                    padding-left: 1rem;
                    position: relative;
                }
                .occasion-features li::before {
                    content: '';
                    position: absolute;
                    left: 0;
                    top: 0.5em;
                    width: 0.35rem;
                    height: 0.35rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.6);
                }
                .occasions-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 4rem;
                }
                .occasions-dots span {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #ffc9a3;
                    animation: dotPulse 2s ease-in-out infinite;
                }
                .occasions-dots span:nth-child(2) { animation-delay: 0.2s; }
                .occasions-dots span:nth-child(3) { animation-delay: 0.4s; }
                @keyframes dotPulse {
                    0%, 100% { transform: scale(1); opacity: 0.5; }
                    50% { transform: scale(1.5); opacity: 1; }
                }
                @media (max-width: 950px) {
                    .occasions-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
