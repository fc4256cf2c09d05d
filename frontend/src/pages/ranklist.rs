use leptos::*;
use leptos_router::ParamsMap;

use crate::{
    components::fetched,
    models::{with_query, RankItem, RankListQuery, ScoringRule},
    router::{use_router, ParamsMapExt},
    utils::{use_api, UseApiOptions},
};

/// Contest `0` ranks every user on every problem.
const GLOBAL_CONTEST: i64 = 0;

fn ranklist_location(contest: i64, query: &RankListQuery) -> String {
    let mut location = format!("/ranklist?contest={contest}&scoring_rule={}", query.scoring_rule);
    if let Some(tie_breaker) = query.tie_breaker {
        location.push_str(&format!("&tie_breaker={tie_breaker}"));
    }
    location
}

#[component]
pub fn RankList(query: ParamsMap) -> impl IntoView {
    let router = use_router();
    let contest = query.get_param("contest").unwrap_or(GLOBAL_CONTEST);
    let rank_query = RankListQuery {
        scoring_rule: query.get_param("scoring_rule").unwrap_or_default(),
        tie_breaker: query.get_param("tie_breaker"),
    };
    let ranks = use_api::<Vec<RankItem>>(
        with_query(&format!("/contests/{contest}/ranklist"), &rank_query),
        UseApiOptions::default(),
    );

    let switch_rule = move |scoring_rule: ScoringRule| {
        let query = RankListQuery {
            scoring_rule,
            ..rank_query
        };
        router.navigate(&ranklist_location(contest, &query));
    };
    let rule_button = move |rule: ScoringRule, label: &'static str| {
        let switch_rule = switch_rule.clone();
        let class = if rank_query.scoring_rule == rule {
            "p-2 rounded bg-primary"
        } else {
            "p-2 rounded bg-lighten"
        };
        view! {
            <button
                class=class
                on:click=move |_| switch_rule(rule)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="container mx-auto p-4 flex flex-col gap-4 text-text">
            <h1 class="text-2xl">
                {match contest {
                    GLOBAL_CONTEST => "Rank List".to_owned(),
                    contest => format!("Rank List of contest #{contest}"),
                }}
            </h1>
            <div class="flex flex-row gap-2">
                {rule_button(ScoringRule::Latest, "Latest")}
                {rule_button(ScoringRule::Highest, "Highest")}
            </div>
            {fetched(ranks, |ranks| view! { <RankTable ranks=ranks/> })}
        </div>
    }
}

#[component]
fn RankTable(ranks: Vec<RankItem>) -> impl IntoView {
    let problems = ranks.first().map_or(0, |item| item.scores.len());

    view! {
        <table class="w-full table-auto">
            <thead>
                <tr class="text-left border-b-2 border-primary">
                    <th class="p-2">"Rank"</th>
                    <th class="p-2">"User"</th>
                    {(1..=problems).map(|n| view! { <th class="p-2">{format!("P{n}")}</th> }).collect_view()}
                    <th class="p-2">"Total"</th>
                </tr>
            </thead>
            <tbody>
                {ranks
                    .into_iter()
                    .map(|item| {
                        let total: f64 = item.scores.iter().sum();
                        view! {
                            <tr class="odd:bg-lighten">
                                <td class="p-2">{item.rank}</td>
                                <td class="p-2">{item.user.name}</td>
                                {item
                                    .scores
                                    .into_iter()
                                    .map(|score| view! { <td class="p-2">{score}</td> })
                                    .collect_view()}
                                <td class="p-2">{total}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
