//! Reviews for one entity: star breakdown, recent ratings, and a submit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors get an empty payload from the backend (401 is folded
//! into "no ratings"), so the panel renders the same way for both states and
//! only the submit form depends on the session.

#[cfg(test)]
#[path = "rating_panel_test.rs"]
mod rating_panel_test;

use leptos::prelude::*;

use crate::net::types::{NewRating, RatingsPayload};
use crate::state::ratings::{display_average, rating_breakdown, validate_score};
use crate::state::session::SessionState;

/// Validate form input into a request body.
pub(crate) fn build_new_rating(
    entity_type: &str,
    entity_id: &str,
    score_input: &str,
    comment: &str,
) -> Result<NewRating, &'static str> {
    let score = score_input.trim().parse::<u8>().map_err(|_| "Pick between 1 and 5 stars.")?;
    let score = validate_score(score)?;
    let comment = comment.trim();
    Ok(NewRating {
        entity_type: entity_type.to_owned(),
        entity_id: entity_id.to_owned(),
        score,
        comment: (!comment.is_empty()).then(|| comment.to_owned()),
    })
}

#[component]
pub fn RatingPanel(entity_type: &'static str, entity_id: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let payload = RwSignal::new(RatingsPayload::default());
    let score = RwSignal::new("5".to_owned());
    let comment = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let entity_id = StoredValue::new(entity_id);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let token = session.get().token;
            let entity_id = entity_id.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_ratings(entity_type, &entity_id, token.as_deref()).await {
                    Ok(p) => payload.set(p),
                    Err(e) => log::warn!("ratings fetch for {entity_type}/{entity_id} failed: {e}"),
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let rating = match build_new_rating(
            entity_type,
            &entity_id.get_value(),
            &score.get_untracked(),
            &comment.get_untracked(),
        ) {
            Ok(rating) => rating,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Submitting…".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token;
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_rating(&rating, token.as_deref()).await {
                    Ok(saved) => {
                        payload.update(|p| {
                            p.ratings.insert(0, saved);
                            p.count += 1;
                            p.average = 0.0;
                        });
                        comment.set(String::new());
                        info.set("Thanks for your review!".to_owned());
                    }
                    Err(e) => {
                        log::error!("rating submit failed: {e}");
                        info.set(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = rating;
    };

    let average = move || {
        display_average(&payload.get()).map_or_else(|| "No ratings yet".to_owned(), |a| format!("{a:.1} / 5"))
    };
    let bars = move || {
        rating_breakdown(&payload.get().ratings)
            .into_iter()
            .map(|bucket| {
                let width = format!("width: {:.0}%;", bucket.percent);
                view! {
                    <div class="rating-panel__bar-row">
                        <span class="rating-panel__stars">{format!("{} ★", bucket.stars)}</span>
                        <div class="rating-panel__bar">
                            <div class="rating-panel__bar-fill" style=width></div>
                        </div>
                        <span class="rating-panel__count">{bucket.count}</span>
                    </div>
                }
            })
            .collect_view()
    };
    let recent = move || {
        payload
            .get()
            .ratings
            .into_iter()
            .take(10)
            .map(|r| {
                view! {
                    <li class="rating-panel__item">
                        <strong>{r.user_name.unwrap_or_else(|| "Guest".to_owned())}</strong>
                        <span>{format!(" {} ★", r.score)}</span>
                        {r.comment.map(|c| view! { <p>{c}</p> })}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="rating-panel">
            <h2>"Ratings"</h2>
            <p class="rating-panel__average">{average}</p>
            <div class="rating-panel__breakdown">{bars}</div>
            <ul class="rating-panel__list">{recent}</ul>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! { <p class="rating-panel__hint">"Log in to leave a rating."</p> }
            >
                <form class="rating-panel__form" on:submit=on_submit>
                    <select
                        prop:value=move || score.get()
                        on:change=move |ev| score.set(event_target_value(&ev))
                    >
                        <option value="5">"5 ★"</option>
                        <option value="4">"4 ★"</option>
                        <option value="3">"3 ★"</option>
                        <option value="2">"2 ★"</option>
                        <option value="1">"1 ★"</option>
                    </select>
                    <textarea
                        placeholder="Share your experience"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Submit rating"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="rating-panel__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
