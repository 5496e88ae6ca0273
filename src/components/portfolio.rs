use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{PortfolioCategory, PortfolioItem, PORTFOLIO_ITEMS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PortfolioFilter {
    All,
    Category(PortfolioCategory),
}

impl PortfolioFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioFilter::All => "All",
            PortfolioFilter::Category(category) => category.label(),
        }
    }
}

const FILTERS: &[PortfolioFilter] = &[
    PortfolioFilter::All,
    PortfolioFilter::Category(PortfolioCategory::Events),
    PortfolioFilter::Category(PortfolioCategory::Collections),
    PortfolioFilter::Category(PortfolioCategory::ReadingCorners),
];

/// Items shown under the given filter, in their original order.
pub fn filtered_items(filter: PortfolioFilter) -> Vec<&'static PortfolioItem> {
    PORTFOLIO_ITEMS
        .iter()
        .filter(|item| match filter {
            PortfolioFilter::All => true,
            PortfolioFilter::Category(category) => item.category == category,
        })
        .collect()
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active_filter = use_state(|| PortfolioFilter::All);
    let selected = use_state(|| None::<&'static PortfolioItem>);

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            selected.set(None);
        })
    };

    // Stops overlay clicks inside the card from closing the modal.
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class="portfolio-inner">
                <h2>{"Our Portfolio"}</h2>
                <p class="portfolio-lead">
                    {"Discover the special atmosphere of our bookstore"}
                </p>

                <div class="filter-bar" role="tablist">
                    {
                        FILTERS.iter().map(|filter| {
                            let active_filter = active_filter.clone();
                            let filter = *filter;
                            let is_active = *active_filter == filter;
                            html! {
                                <button
                                    key={filter.label()}
                                    class={classes!("filter-button", is_active.then(|| "active"))}
                                    onclick={Callback::from(move |_: MouseEvent| {
                                        active_filter.set(filter)
                                    })}
                                >
                                    {filter.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="portfolio-grid">
                    {
                        filtered_items(*active_filter).into_iter().map(|item| {
                            let selected = selected.clone();
                            html! {
                                <div
                                    class="portfolio-card"
                                    key={item.id}
                                    onclick={Callback::from(move |_: MouseEvent| {
                                        selected.set(Some(item))
                                    })}
                                >
                                    <img src={item.image_url} alt={item.title} loading="lazy" />
                                    <div class="card-overlay">
                                        <h3>{item.title}</h3>
                                        <p>{item.description}</p>
                                        <span class="card-tag">{item.category.label()}</span>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            {
                if let Some(item) = *selected {
                    html! {
                        <div class="lightbox-overlay" onclick={close_modal.clone()}>
                            <div class="lightbox-card" onclick={swallow_click}>
                                <button
                                    class="lightbox-close"
                                    onclick={close_modal}
                                    aria-label="Close"
                                >
                                    {"✕"}
                                </button>
                                <img src={item.image_url} alt={item.title} />
                                <div class="lightbox-body">
                                    <span class="card-tag">{item.category.label()}</span>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .portfolio-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, #fff, #f9fafb);
                }

                .portfolio-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .portfolio-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.8rem;
                    color: #333;
                    text-align: center;
                    margin-bottom: 0.8rem;
                }

                .portfolio-lead {
                    text-align: center;
                    color: #666;
                    font-size: 1.1rem;
                    margin-bottom: 2.5rem;
                }

                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.8rem;
                    margin-bottom: 3rem;
                }

                .filter-button {
                    background: #fff;
                    color: #555;
                    border: 1px solid #d1d5db;
                    border-radius: 999px;
                    padding: 0.6rem 1.5rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .filter-button:hover {
                    border-color: #9B786F;
                    color: #9B786F;
                }

                .filter-button.active {
                    background: #9B786F;
                    border-color: #9B786F;
                    color: #fff;
                }

                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .portfolio-card {
                    position: relative;
                    border-radius: 12px;
                    overflow: hidden;
                    cursor: pointer;
                    aspect-ratio: 4 / 3;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
                }

                .portfolio-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.4s ease;
                }

                .portfolio-card:hover img {
                    transform: scale(1.06);
                }

                .card-overlay {
                    position: absolute;
                    inset: auto 0 0 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.85), transparent);
                    color: #fff;
                    padding: 2rem 1.2rem 1.2rem;
                }

                .card-overlay h3 {
                    font-family: Georgia, serif;
                    font-size: 1.2rem;
                    margin-bottom: 0.3rem;
                }

                .card-overlay p {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.85);
                    margin-bottom: 0.5rem;
                }

                .card-tag {
                    display: inline-block;
                    background: rgba(155, 120, 111, 0.9);
                    color: #fff;
                    font-size: 0.75rem;
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                }

                .lightbox-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    background: rgba(0, 0, 0, 0.75);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                }

                .lightbox-card {
                    position: relative;
                    background: #fff;
                    border-radius: 16px;
                    overflow: hidden;
                    max-width: 720px;
                    width: 100%;
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.4);
                }

                .lightbox-card img {
                    width: 100%;
                    max-height: 420px;
                    object-fit: cover;
                    display: block;
                }

                .lightbox-body {
                    padding: 1.8rem;
                }

                .lightbox-body .card-tag {
                    margin-bottom: 0.8rem;
                }

                .lightbox-body h3 {
                    font-family: Georgia, serif;
                    font-size: 1.6rem;
                    color: #333;
                    margin-bottom: 0.5rem;
                }

                .lightbox-body p {
                    color: #666;
                    line-height: 1.6;
                }

                .lightbox-close {
                    position: absolute;
                    top: 0.8rem;
                    right: 0.8rem;
                    z-index: 1;
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 36px;
                    height: 36px;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .lightbox-close:hover {
                    background: rgba(0, 0, 0, 0.8);
                }

                @media (max-width: 900px) {
                    .portfolio-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 600px) {
                    .portfolio-grid {
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

    #[test]
    fn all_filter_yields_every_item() {
        let items = filtered_items(PortfolioFilter::All);
        assert_eq!(items.len(), PORTFOLIO_ITEMS.len());
    }

    #[test]
    fn category_filter_yields_exactly_matching_subset() {
        for category in [
            PortfolioCategory::Events,
            PortfolioCategory::Collections,
            PortfolioCategory::ReadingCorners,
        ] {
            let items = filtered_items(PortfolioFilter::Category(category));
            assert!(!items.is_empty());
            assert!(items.iter().all(|item| item.category == category));

            let expected = PORTFOLIO_ITEMS.iter().filter(|i| i.category == category).count();
            assert_eq!(items.len(), expected);
        }
    }

    #[test]
    fn category_filters_partition_the_full_set() {
        let total: usize = [
            PortfolioCategory::Events,
            PortfolioCategory::Collections,
            PortfolioCategory::ReadingCorners,
        ]
        .into_iter()
        .map(|c| filtered_items(PortfolioFilter::Category(c)).len())
        .sum();
        assert_eq!(total, PORTFOLIO_ITEMS.len());
    }

    #[test]
    fn filtering_preserves_original_relative_order() {
        let items = filtered_items(PortfolioFilter::Category(PortfolioCategory::Events));
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
