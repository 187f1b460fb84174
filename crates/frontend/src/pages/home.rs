use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const SLIDE_INTERVAL_MS: u32 = 3_000;

const SLIDES: [&str; 4] = ["/p1.jpg", "/p2.jpg", "/p3.jpg", "/p4.jpg"];

#[component]
fn HeroSection() -> impl IntoView {
    let (current, set_current) = signal(0usize);

    // Auto-advance loop; the flag stops it when the page unmounts
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                set_current.update(|index| *index = (*index + 1) % SLIDES.len());
            }
        });
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let show_prev = move |_| {
        set_current.update(|index| *index = (*index + SLIDES.len() - 1) % SLIDES.len())
    };
    let show_next = move |_| set_current.update(|index| *index = (*index + 1) % SLIDES.len());

    view! {
        <section class="hero">
            <div class="hero__slides">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(index, src)| {
                        view! {
                            <img
                                class="hero__slide"
                                class:hero__slide--active=move || current.get() == index
                                src=*src
                                alt=""
                            />
                        }
                    })
                    .collect_view()}
                <button
                    class="hero__arrow hero__arrow--left"
                    aria-label="Previous slide"
                    on:click=show_prev
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="hero__arrow hero__arrow--right"
                    aria-label="Next slide"
                    on:click=show_next
                >
                    {icon("chevron-right")}
                </button>
                <div class="hero__dots">
                    {(0..SLIDES.len())
                        .map(|index| {
                            view! {
                                <button
                                    class="hero__dot"
                                    class:hero__dot--active=move || current.get() == index
                                    aria-label=format!("Go to slide {}", index + 1)
                                    on:click=move |_| set_current.set(index)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="hero__copy">
                <h1 class="hero__title">"Artisan Haven"</h1>
                <p class="hero__tagline">
                    "Discover unique, handcrafted treasures made with love by skilled artisans from around the world."
                </p>
                <a href="/products" class="button button--primary hero__cta">
                    "Explore Crafts"
                    {icon("arrow-right")}
                </a>
            </div>
        </section>
    }
}

#[component]
fn SellingPoints() -> impl IntoView {
    view! {
        <section class="selling-points">
            <div class="selling-point">
                <h3>"Handmade Quality"</h3>
                <p>"Every piece is crafted by hand with care and attention to detail."</p>
            </div>
            <div class="selling-point">
                <h3>"Artisan Stories"</h3>
                <p>"Each product carries the story of the maker behind it."</p>
            </div>
            <div class="selling-point">
                <h3>"Worldwide Shipping"</h3>
                <p>"Treasures packed securely and delivered to your door."</p>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <HeroSection/>
            <SellingPoints/>
        </div>
    }
}
