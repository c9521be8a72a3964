//! Benchmarks for prompt_theme color resolution and prompt assembly.

use criterion::{Criterion, criterion_group, criterion_main};
use prompt_theme::color::{Channel, ColorDepth, ColorExpr, resolve_fragment};
use prompt_theme::prelude::*;
use std::collections::HashMap;
use std::hint::black_box;

const THEME: &str = r##"[
    {"env": "USER", "color": {"fg": "light green", "effect": "bold"}},
    {"text": "@"},
    {"text": "\\h", "color": {"fg": "#ff8800", "bg": "rgb(40, 40, 40)", "depth": 8}},
    {"type": "reset"},
    {"text": ":\\w", "color": {"fg": "SteelBlue", "depth": 8}},
    {"type": "reset"},
    {"text": " \\$ "}
]"##;

fn benchmark_color_parse(c: &mut Criterion) {
    c.bench_function("color_parse_name", |b| {
        b.iter(|| black_box(ColorExpr::parse(black_box("Light Red"))));
    });

    c.bench_function("color_parse_rgb", |b| {
        b.iter(|| black_box(ColorExpr::parse(black_box("rgb(12, 200, 99)"))));
    });
}

fn benchmark_color_resolve(c: &mut Criterion) {
    // Build both indices outside the timed loop.
    let _ = resolve_fragment("red", Channel::Foreground, ColorDepth::Standard);
    let _ = resolve_fragment("red", Channel::Foreground, ColorDepth::EightBit);

    c.bench_function("resolve_name_4bit", |b| {
        b.iter(|| {
            black_box(resolve_fragment(
                black_box("light cyan"),
                Channel::Foreground,
                ColorDepth::Standard,
            ))
        });
    });

    c.bench_function("resolve_hex_8bit", |b| {
        b.iter(|| {
            black_box(resolve_fragment(
                black_box("#7f3a9c"),
                Channel::Background,
                ColorDepth::EightBit,
            ))
        });
    });

    c.bench_function("resolve_grey_8bit", |b| {
        b.iter(|| {
            black_box(resolve_fragment(
                black_box("#6b6b6b"),
                Channel::Foreground,
                ColorDepth::EightBit,
            ))
        });
    });
}

fn benchmark_format_escape(c: &mut Criterion) {
    c.bench_function("format_escape_full", |b| {
        b.iter(|| {
            black_box(format_escape(
                black_box(Some("38;5;208")),
                black_box(Some("48;5;235")),
                Some(Effect::Bold),
            ))
        });
    });
}

fn benchmark_theme(c: &mut Criterion) {
    c.bench_function("theme_parse", |b| {
        b.iter(|| black_box(Theme::from_json_str(black_box(THEME))));
    });

    let Ok(theme) = Theme::from_json_str(THEME) else {
        return;
    };
    let env = HashMap::from([("USER".to_string(), "ada".to_string())]);

    c.bench_function("build_prompt", |b| {
        b.iter(|| black_box(build_prompt(&theme, &env)));
    });
}

criterion_group!(
    benches,
    benchmark_color_parse,
    benchmark_color_resolve,
    benchmark_format_escape,
    benchmark_theme,
);

criterion_main!(benches);
