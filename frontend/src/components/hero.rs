use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::animation::sequence::{SequenceAction, TypingSequence};
use crate::components::fallback_image::FallbackImage;
use crate::config::{self, TAGLINE};
use crate::data::TRUSTED_BY;
use crate::Route;

const HEADLINE: &str = "Building the Digital Elite";

const CODE_SNIPPET: &str = r#"// OITS Dhaka Project Config
const project = {
  client: "Innovative Startup",
  goals: ["Scalability", "Security"],
  techStack: ["React", "Next.js", "AWS"],
  status: "Ready for Launch"
};

async function deploy() {
  console.log("Initializing Engineering...");
  await project.initialize();
  return "Excellence Delivered.";
}"#;

const TITLE_PHASE: usize = 0;
const TAGLINE_PHASE: usize = 1;
const CODE_PHASE: usize = 2;

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero_ref = use_node_ref();
    let visible = use_reveal(hero_ref.clone(), config::REVEAL_THRESHOLD);
    let sequence = use_reducer(|| TypingSequence::new(vec![HEADLINE, TAGLINE, CODE_SNIPPET]));

    {
        let dispatcher = sequence.dispatcher();
        use_effect_with_deps(move |done: &bool| {
            let interval = (!*done).then(|| {
                Interval::new(config::TYPING_TICK_MS, move || {
                    dispatcher.dispatch(SequenceAction::Tick);
                })
            });
            move || drop(interval)
        }, sequence.is_done());
    }

    let fade = |extra: &'static str| classes!("hero-fade", extra, reveal_class(visible, "shown", "hidden"));
    let cursor = |phase: usize| -> Html {
        if sequence.is_phase_started(phase) && !sequence.is_phase_complete(phase) {
            html! { <span class="typing-cursor"></span> }
        } else {
            html! {}
        }
    };

    html! {
        <section ref={hero_ref} id="home" class="hero">
            <div class="hero-background"></div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class={fade("hero-badge")}>
                        <span>{"⚡ Engineering Excellence"}</span>
                    </div>

                    <h1 class={fade("hero-title")} aria-label={HEADLINE}>
                        {sequence.visible(TITLE_PHASE)}
                        {cursor(TITLE_PHASE)}
                    </h1>

                    <p class={fade("hero-tagline")}>
                        {sequence.visible(TAGLINE_PHASE)}
                        { if sequence.is_phase_complete(TAGLINE_PHASE) {
                            ". High-performance software engineering for businesses that refuse to settle for second best."
                        } else { "" } }
                        {cursor(TAGLINE_PHASE)}
                    </p>

                    <div class={fade("hero-actions")}>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary btn-lg">
                            {"Request a Quote →"}
                        </Link<Route>>
                        <Link<Route> to={Route::Portfolio} classes="btn btn-outline btn-lg">
                            {"Our Portfolio"}
                        </Link<Route>>
                    </div>

                    <div class={fade("hero-trusted")}>
                        <p class="eyebrow">{"Trusted By Innovative Industry Leaders"}</p>
                        <div class="trusted-list">
                            { for TRUSTED_BY.iter().map(|(name, monogram)| html! {
                                <div key={*name} class="trusted-item">
                                    <span class="trusted-monogram">{*monogram}</span>
                                    <span class="trusted-name">{*name}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div class={fade("hero-visual")}>
                    <div class="code-window">
                        <div class="code-window-bar">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                            <span class="code-window-title">{"main.ts"}</span>
                        </div>
                        <pre class="code-window-body">
                            {sequence.visible(CODE_PHASE)}
                            <span class="typing-cursor"></span>
                        </pre>
                    </div>
                    <div class="hero-image">
                        <FallbackImage src="https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=1200" alt="Engineers at work" />
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    padding: 12rem 1.5rem 8rem;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    background-image: linear-gradient(to bottom, var(--bg) 0%, transparent 50%, var(--bg) 100%),
                        url('https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&q=80&w=2070');
                    background-size: cover;
                    background-position: center;
                    opacity: 0.1;
                    filter: blur(4px);
                }
                .hero-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    gap: 6rem;
                    align-items: center;
                }
                .hero-copy {
                    flex: 1;
                }
                .hero-visual {
                    flex: 1;
                    position: relative;
                }
                .hero-fade {
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .hero-fade.hidden {
                    opacity: 0;
                    transform: translateY(2.5rem);
                }
                .hero-fade.shown {
                    opacity: 1;
                    transform: none;
                }
                .hero-visual.hidden {
                    transform: translateX(3rem) scale(0.95);
                }
                .hero-badge span {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: var(--accent-soft);
                    color: var(--accent);
                    font-size: 0.65rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .hero-title {
                    font-size: clamp(3rem, 7vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    color: var(--text-strong);
                    min-height: 2em;
                }
                .hero-tagline {
                    font-size: 1.25rem;
                    color: var(--text-muted);
                    line-height: 1.6;
                    max-width: 40rem;
                    min-height: 3.2em;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-trusted {
                    padding-top: 2.5rem;
                }
                .trusted-list {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem 2.5rem;
                }
                .trusted-item {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .trusted-monogram {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: var(--surface-alt);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.65rem;
                    font-weight: 900;
                    color: var(--text-muted);
                    transition: all 0.3s;
                }
                .trusted-item:hover .trusted-monogram {
                    background: var(--accent);
                    color: #fff;
                    transform: scale(1.1);
                }
                .trusted-name {
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--text-muted);
                }
                .code-window {
                    position: absolute;
                    top: -3rem;
                    left: -4rem;
                    width: 24rem;
                    z-index: 2;
                    background: rgba(2, 6, 23, 0.9);
                    border: 1px solid #1e293b;
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                    animation: float 6s ease-in-out infinite;
                }
                .code-window-bar {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 0.75rem 1rem;
                    border-bottom: 1px solid #1e293b;
                }
                .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                }
                .dot.red { background: #ef4444; }
                .dot.yellow { background: #eab308; }
                .dot.green { background: #22c55e; }
                .code-window-title {
                    margin-left: auto;
                    font-family: monospace;
                    font-size: 0.65rem;
                    color: #64748b;
                }
                .code-window-body {
                    margin: 0;
                    padding: 1.25rem;
                    height: 13rem;
                    overflow: hidden;
                    font-size: 0.7rem;
                    line-height: 1.6;
                    color: #60a5fa;
                    white-space: pre-wrap;
                }
                .typing-cursor {
                    display: inline-block;
                    width: 0.35rem;
                    height: 1em;
                    margin-left: 0.2rem;
                    vertical-align: middle;
                    background: var(--accent);
                    animation: pulse 1s infinite;
                }
                .hero-image {
                    border-radius: 1.5rem;
                    overflow: hidden;
                    aspect-ratio: 4 / 3;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 1s;
                }
                .hero-image:hover img {
                    transform: scale(1.05);
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                @media (max-width: 1024px) {
                    .hero-inner {
                        flex-direction: column;
                        text-align: center;
                    }
                    .code-window {
                        display: none;
                    }
                    .hero-actions,
                    .trusted-list {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
