use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::video_player::VideoPlayer;
use crate::config;
use crate::data::{self, Project};
use crate::links::{share_links, SHARE_TEXT};
use crate::portfolio::filter::{FilterSelection, ALL_CATEGORIES};
use crate::storage::LocalStore;

/// Which project the modal shows, and whether it opened on the demo video.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalView {
    pub project: &'static Project,
    pub autoplay: bool,
}

impl ModalView {
    pub fn shows_player(&self) -> bool {
        self.autoplay && self.project.demo_video_url.is_some()
    }

    /// Closing the player goes back to the case study, not out of the modal.
    pub fn without_player(self) -> Self {
        Self { autoplay: false, ..self }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub index: usize,
    pub highlighted: Vec<String>,
    pub on_open: Callback<ModalView>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let image_loaded = use_state(|| false);
    let project = props.project;

    let on_load = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };

    let open = |autoplay: bool| {
        let on_open = props.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_open.emit(ModalView { project, autoplay });
        })
    };

    html! {
        <article class="project-card" style={format!("animation-delay: {}ms;", props.index * 50)}>
            <div class="project-media" onclick={open(false)}>
                <FallbackImage
                    src={project.image_url}
                    alt={project.title}
                    onload={on_load}
                    class={classes!(if *image_loaded { "loaded" } else { "loading" })}
                />
                <div class="project-overlay">
                    <button class="overlay-btn" onclick={open(false)}>{"Explore Case Study"}</button>
                    if project.demo_video_url.is_some() {
                        <button class="overlay-btn demo" onclick={open(true)}>{"▶ Watch Demo"}</button>
                    }
                </div>
            </div>
            <div class="project-body">
                <p class="project-category">{project.category}</p>
                <h4>{project.title}</h4>
                <p class="project-summary">{project.long_description()}</p>
                <div class="project-tags">
                    { for project.technologies.iter().map(|tech| {
                        let highlighted = props.highlighted.iter().any(|t| t == tech);
                        html! {
                            <span key={*tech} class={classes!("project-tag", highlighted.then(|| "highlighted"))}>{*tech}</span>
                        }
                    }) }
                </div>
            </div>
        </article>
    }
}

#[function_component(ProjectSkeleton)]
fn project_skeleton() -> Html {
    html! {
        <div class="project-card skeleton" aria-hidden="true">
            <div class="skeleton-media"></div>
            <div class="project-body">
                <div class="skeleton-line wide"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    /// Home page preview: cap the grid and hide the filter controls.
    #[prop_or_default]
    pub limit: Option<usize>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let catalog = data::catalog();
    let selection = use_state(|| FilterSelection::load(&LocalStore));
    let loading = use_state(|| true);
    let modal = use_state(|| None::<ModalView>);

    {
        let loading = loading.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(config::PORTFOLIO_LOADING_MS, move || loading.set(false));
            move || drop(timeout)
        }, ());
    }

    // Every change is written straight through to storage.
    use_effect_with_deps(move |selection: &FilterSelection| {
        selection.persist(&LocalStore);
        || ()
    }, (*selection).clone());

    let update = |change: Box<dyn Fn(&mut FilterSelection)>| {
        let selection = selection.clone();
        move || {
            let mut next = (*selection).clone();
            change(&mut next);
            selection.set(next);
        }
    };

    let on_reset = {
        let reset = update(Box::new(|s: &mut FilterSelection| s.reset()));
        Callback::from(move |_: MouseEvent| {
            info!("Resetting portfolio filters");
            reset()
        })
    };

    let on_open = {
        let modal = modal.clone();
        Callback::from(move |view: ModalView| modal.set(Some(view)))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(None))
    };

    let visible = selection.apply(catalog, props.limit);
    let show_filters = props.limit.is_none();
    let highlighted: Vec<String> = selection.tags.iter().cloned().collect();

    let category_nav = selection.category_counts(catalog).into_iter().map(|(category, count)| {
        let active = selection.is_category_active(category);
        let toggle = update(Box::new(move |s: &mut FilterSelection| s.toggle_category(category)));
        html! {
            <button
                key={category}
                class={classes!("category-btn", active.then(|| "active"))}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_: MouseEvent| toggle())}
            >
                {category}
                <span class="filter-count">{count}</span>
                if active && category != ALL_CATEGORIES {
                    <span class="check">{"✓"}</span>
                }
            </button>
        }
    }).collect::<Html>();

    let tag_chips = selection.tag_counts(catalog).into_iter().map(|(tag, count)| {
        let active = selection.is_tag_active(tag);
        let toggle = update(Box::new(move |s: &mut FilterSelection| s.toggle_tag(tag)));
        html! {
            <button
                key={tag}
                class={classes!("tag-chip", active.then(|| "active"), (count == 0).then(|| "empty"))}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_: MouseEvent| toggle())}
            >
                {tag}
                <span class="filter-count">{count}</span>
            </button>
        }
    }).collect::<Html>();

    let modal_html = match *modal {
        None => html! {},
        Some(view) => {
            let project = view.project;
            let share = share_links(&config::current_page_url(), SHARE_TEXT);
            let player_closed = {
                let modal = modal.clone();
                Callback::from(move |_: ()| modal.set(Some(view.without_player())))
            };
            html! {
                <div class="project-modal" role="dialog" aria-modal="true" aria-label={project.title}>
                    <div class="modal-backdrop" onclick={close_modal.clone()}></div>
                    <div class="modal-panel">
                        <div class="modal-media">
                            if let (true, Some(src)) = (view.shows_player(), project.demo_video_url) {
                                <VideoPlayer
                                    src={src}
                                    captions_url={project.captions_url.map(AttrValue::from)}
                                    poster={Some(AttrValue::from(project.image_url))}
                                    on_close={player_closed}
                                />
                            } else {
                                <FallbackImage src={project.image_url} alt={project.title} />
                                <button class="modal-close" onclick={close_modal.clone()} aria-label="Close">{"✕"}</button>
                                <div class="modal-title">
                                    <h3>{project.title}</h3>
                                </div>
                            }
                        </div>
                        <div class="modal-body">
                            <p>{project.long_description()}</p>
                            <div class="share-row">
                                <span>{"Share:"}</span>
                                <a href={share.twitter} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                                <a href={share.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                            </div>
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class={classes!("portfolio-layout", show_filters.then(|| "with-filters"))}>
                if show_filters {
                    <aside class="portfolio-sidebar">
                        <h4 class="filter-heading">{"Verticals"}</h4>
                        <nav class="category-nav">{category_nav}</nav>
                    </aside>
                }
                <div class="portfolio-main">
                    if show_filters {
                        <div class="tag-panel">
                            <div class="tag-panel-header">
                                <span class="tag-panel-title">{"Tech Filters"}</span>
                                if !selection.is_empty() {
                                    <button class="reset-btn" onclick={on_reset.clone()}>{"↺ Reset"}</button>
                                }
                            </div>
                            <div class="tag-chips">{tag_chips}</div>
                        </div>
                    }
                    <div class="project-grid">
                        if *loading {
                            <ProjectSkeleton />
                            <ProjectSkeleton />
                            <ProjectSkeleton />
                        } else if visible.is_empty() {
                            <div class="portfolio-empty">
                                <h4>{"No projects match these filters"}</h4>
                                <p>{"Try removing a filter or start over."}</p>
                                <button class="btn btn-primary" onclick={on_reset}>{"Reset filters"}</button>
                            </div>
                        } else {
                            { for visible.into_iter().enumerate().map(|(i, project)| html! {
                                <ProjectCard
                                    key={project.id}
                                    project={project}
                                    index={i}
                                    highlighted={highlighted.clone()}
                                    on_open={on_open.clone()}
                                />
                            }) }
                        }
                    </div>
                </div>
            </div>
            {modal_html}
            <style>
                {r#"
                .portfolio-section {
                    padding: 6rem 1.5rem;
                    background: var(--surface-alt);
                }
                .portfolio-layout {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    gap: 2rem;
                }
                .portfolio-sidebar {
                    width: 18rem;
                    flex-shrink: 0;
                }
                .filter-heading {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--text-faint);
                    margin-bottom: 1rem;
                }
                .category-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .category-btn {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: var(--text-muted);
                    font-weight: 600;
                    font-size: 0.875rem;
                    text-align: left;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .category-btn.active {
                    background: var(--text-strong);
                    color: var(--bg);
                    border-color: var(--text-strong);
                }
                .filter-count {
                    margin-left: auto;
                    font-size: 0.7rem;
                    opacity: 0.7;
                }
                .check {
                    font-size: 0.75rem;
                }
                .portfolio-main {
                    flex: 1;
                }
                .tag-panel {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 2.5rem;
                }
                .tag-panel-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                }
                .tag-panel-title {
                    font-weight: 700;
                    font-size: 1.125rem;
                    color: var(--text-strong);
                }
                .reset-btn {
                    background: none;
                    border: none;
                    color: var(--accent);
                    font-weight: 700;
                    font-size: 0.75rem;
                    cursor: pointer;
                }
                .tag-chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tag-chip {
                    display: inline-flex;
                    gap: 0.4rem;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid var(--border);
                    background: var(--surface-alt);
                    color: var(--text-muted);
                    font-size: 0.75rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .tag-chip.active {
                    background: var(--accent);
                    border-color: var(--accent);
                    color: #fff;
                    transform: scale(1.1);
                }
                .tag-chip.empty:not(.active) {
                    opacity: 0.5;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    min-height: 400px;
                }
                .project-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 1rem;
                    overflow: hidden;
                    animation: fade-in 0.6s both;
                    transition: box-shadow 0.5s, transform 0.5s;
                }
                .project-card:hover {
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    transform: translateY(-0.5rem);
                }
                .project-media {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    background: var(--surface-alt);
                    cursor: pointer;
                }
                .project-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: opacity 1s, transform 1s;
                }
                .project-media img.loading {
                    opacity: 0;
                }
                .project-card:hover .project-media img {
                    transform: scale(1.05);
                }
                .project-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: rgba(15, 23, 42, 0.6);
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .project-card:hover .project-overlay {
                    opacity: 1;
                }
                .overlay-btn {
                    background: #fff;
                    color: #0f172a;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.625rem 1.5rem;
                    font-weight: 700;
                    font-size: 0.75rem;
                    cursor: pointer;
                }
                .overlay-btn.demo {
                    background: var(--accent);
                    color: #fff;
                }
                .project-body {
                    padding: 1.5rem;
                }
                .project-category {
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--accent);
                    margin: 0 0 0.5rem;
                }
                .project-body h4 {
                    font-size: 1.25rem;
                    color: var(--text-strong);
                    margin: 0 0 0.75rem;
                }
                .project-summary {
                    color: var(--text-muted);
                    font-size: 0.875rem;
                    font-style: italic;
                    min-height: 4rem;
                }
                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .project-tag {
                    font-size: 0.65rem;
                    font-weight: 700;
                    padding: 0.25rem 0.625rem;
                    border-radius: 0.375rem;
                    border: 1px solid var(--border);
                    color: var(--text-muted);
                    transition: all 0.3s;
                }
                .project-tag.highlighted {
                    background: var(--accent);
                    border-color: var(--accent);
                    color: #fff;
                    transform: scale(1.1);
                }
                .skeleton .skeleton-media {
                    aspect-ratio: 4 / 3;
                    background: var(--surface-alt);
                    animation: pulse 1.5s infinite;
                }
                .skeleton-line {
                    height: 0.75rem;
                    width: 70%;
                    border-radius: 0.25rem;
                    background: var(--surface-alt);
                    margin-bottom: 0.75rem;
                    animation: pulse 1.5s infinite;
                }
                .skeleton-line.wide {
                    width: 90%;
                    height: 1.25rem;
                }
                .skeleton-line.short {
                    width: 40%;
                }
                .portfolio-empty {
                    grid-column: 1 / -1;
                    text-align: center;
                    padding: 4rem 1rem;
                    color: var(--text-muted);
                }
                .portfolio-empty h4 {
                    color: var(--text-strong);
                    font-size: 1.25rem;
                }
                .project-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(15, 23, 42, 0.8);
                    backdrop-filter: blur(4px);
                }
                .modal-panel {
                    position: relative;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: var(--surface);
                    border-radius: 1.5rem;
                }
                .modal-media {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    background: #000;
                }
                .modal-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: rgba(0, 0, 0, 0.4);
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                }
                .modal-title {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 2rem;
                    color: #fff;
                    background: linear-gradient(to top, #0f172a, transparent);
                }
                .modal-title h3 {
                    font-size: 1.875rem;
                    margin: 0;
                }
                .modal-body {
                    padding: 2rem;
                    color: var(--text-muted);
                    line-height: 1.7;
                }
                .share-row {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .share-row a {
                    color: var(--accent);
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .portfolio-layout {
                        flex-direction: column;
                    }
                    .portfolio-sidebar {
                        width: 100%;
                    }
                    .category-nav {
                        flex-direction: row;
                        overflow-x: auto;
                    }
                    .project-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .project-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> &'static Project {
        data::catalog().iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_demo_request_opens_player_only_when_video_exists() {
        let with_video = ModalView { project: find("fintrack"), autoplay: true };
        let without_video = ModalView { project: find("medibook"), autoplay: true };
        assert!(with_video.shows_player());
        assert!(!without_video.shows_player());
    }

    #[test]
    fn test_case_study_never_opens_player() {
        let view = ModalView { project: find("fintrack"), autoplay: false };
        assert!(!view.shows_player());
    }

    #[test]
    fn test_closing_player_keeps_project_open() {
        let view = ModalView { project: find("learnly"), autoplay: true };
        let closed = view.without_player();
        assert_eq!(closed.project.id, "learnly");
        assert!(!closed.shows_player());
    }
}
