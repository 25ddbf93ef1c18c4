//! Recommendation and session transition throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use driveplay::catalog::{Cognition, Mood, Style};
use driveplay::core::{Player, SessionConfig};
use driveplay::games::roles::{RoleDeductionEngine, RoleEvent};
use driveplay::recommend::{RecommendationCriteria, RecommendationEngine};
use driveplay::session::SessionEngine;

fn bench_recommend(c: &mut Criterion) {
    let engine = RecommendationEngine::builtin();
    let direct = RecommendationCriteria::new(4, Mood::Party, Style::Competitive, Cognition::High);
    let fallback = RecommendationCriteria::new(12, Mood::Relax, Style::Coop, Cognition::Low);

    c.bench_function("recommend_direct", |b| b.iter(|| engine.recommend(black_box(&direct))));
    c.bench_function("recommend_fallback", |b| b.iter(|| engine.recommend(black_box(&fallback))));
}

fn bench_role_transition(c: &mut Criterion) {
    let engine = RoleDeductionEngine::new(SessionConfig::default().with_seed(1));
    let roster = Player::roster(["a", "b", "c", "d", "e", "f"]);

    c.bench_function("role_new_session", |b| b.iter(|| engine.new_session(black_box(&roster))));

    let mut state = engine.new_session(&roster).unwrap();
    for _ in 0..roster.len() {
        state = engine.transition(&state, RoleEvent::AdvanceReveal).unwrap();
    }
    c.bench_function("role_tick", |b| b.iter(|| engine.transition(black_box(&state), RoleEvent::Tick(1))));
}

criterion_group!(benches, bench_recommend, bench_role_transition);
criterion_main!(benches);
