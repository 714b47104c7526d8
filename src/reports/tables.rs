use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fourb::scorer::model::{MetricScore, RebootMetrics};
use fourb::scorer::{BallData, Pillar, PlayerLevel, PlayerReport, ScoreResult, TileState};

fn state_color(state: TileState) -> Color {
    match state {
        TileState::Synced => Color::Green,
        TileState::Developing => Color::Yellow,
        TileState::Limiting => Color::Red,
        TileState::NoData => Color::DarkGrey,
    }
}

fn fmt_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{:.1}", s))
}

fn fmt_opt(v: Option<f64>, precision: usize) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{:.*}", precision, x))
}

fn fmt_area(p: Option<Pillar>) -> String {
    p.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn result_row(name: &str, r: &ScoreResult) -> Vec<Cell> {
    vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new(fmt_score(r.score)).set_alignment(CellAlignment::Right),
        Cell::new(r.state.to_string()).fg(state_color(r.state)),
        Cell::new(&r.label),
    ]
}

pub fn player(report: &PlayerReport) {
    let title = report.name.as_deref().unwrap_or("Player");
    println!("\n🎯 === 4B REPORT: {} ({}) === 🎯", title, report.level);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Pillar").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("State"),
        Cell::new("Label"),
    ]);

    table.add_row(result_row("Brain", &report.brain));
    table.add_row(result_row("Body", &report.body));
    table.add_row(result_row("Bat", &report.bat));
    table.add_row(result_row("Ball", &report.ball));

    let s = &report.summary;
    table.add_row(vec![
        Cell::new("4B").add_attribute(Attribute::Bold),
        Cell::new(fmt_score(s.overall_score))
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
        Cell::new(s.overall_state.to_string()).fg(state_color(s.overall_state)),
        Cell::new(&s.overall_label).add_attribute(Attribute::Bold),
    ]);
    println!("{}", table);

    println!(
        "Strongest: {}   Focus: {}",
        fmt_area(s.strongest_area),
        fmt_area(s.focus_area)
    );
}

pub fn batch(results: &[PlayerReport]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Level"),
        Cell::new("Brain"),
        Cell::new("Body"),
        Cell::new("Bat"),
        Cell::new("Ball"),
        Cell::new("4B").fg(Color::Cyan),
        Cell::new("State"),
        Cell::new("Strongest").fg(Color::Green),
        Cell::new("Focus").fg(Color::Red),
    ]);

    for i in 3..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, r) in results.iter().enumerate() {
        let s = &r.summary;
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(r.name.as_deref().unwrap_or("?")).add_attribute(Attribute::Bold),
            Cell::new(r.level.to_string()),
            Cell::new(fmt_score(r.brain.score)).fg(state_color(r.brain.state)),
            Cell::new(fmt_score(r.body.score)).fg(state_color(r.body.state)),
            Cell::new(fmt_score(r.bat.score)).fg(state_color(r.bat.state)),
            Cell::new(fmt_score(r.ball.score)).fg(state_color(r.ball.state)),
            Cell::new(fmt_score(s.overall_score)).fg(Color::Cyan),
            Cell::new(&s.overall_label).fg(state_color(s.overall_state)),
            Cell::new(fmt_area(s.strongest_area)),
            Cell::new(fmt_area(s.focus_area)),
        ]);
    }
    println!("\n{}", table);
}

fn metric_row(table: &mut Table, name: &str, unit: &str, m: Option<MetricScore>) {
    let (value, score) = match m {
        Some(m) => (format!("{:.2}{}", m.value, unit), format!("{:.0}", m.score)),
        None => ("-".to_string(), "-".to_string()),
    };
    table.add_row(vec![
        Cell::new(name),
        Cell::new(value).set_alignment(CellAlignment::Right),
        Cell::new(score).set_alignment(CellAlignment::Right),
    ]);
}

pub fn reboot(m: &RebootMetrics) {
    println!(
        "\n🧬 === MODEL SWING: {} ({} frames) === 🧬",
        m.level, m.frame_count
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    metric_row(&mut table, "COM forward", "%", Some(m.com_forward));
    metric_row(&mut table, "Head movement", " in", Some(m.head_movement));
    metric_row(&mut table, "Spine angle SD", "°", Some(m.spine_stability));
    table.add_row(vec![
        Cell::new("Sequence"),
        Cell::new(&m.sequence.transitions).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.0}", m.sequence.score)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Body").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.1}", m.body_score)).fg(Color::Cyan),
    ]);

    if let Some(bat) = &m.bat {
        metric_row(&mut table, "Bat speed", " mph", bat.speed);
        metric_row(&mut table, "Attack angle", "°", bat.attack_angle);
        metric_row(&mut table, "Time in zone", " ms", bat.time_in_zone);
        table.add_row(vec![
            Cell::new("Bat").add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(fmt_score(bat.score)).fg(Color::Cyan),
        ]);
    }

    if let Some(ball) = &m.ball {
        metric_row(&mut table, "EV90", " mph", ball.ev90);
        metric_row(&mut table, "LA90", "°", ball.la90);
        metric_row(&mut table, "Hit rate", "", ball.hit_rate);
        table.add_row(vec![
            Cell::new("Ball").add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(fmt_score(ball.score)).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);

    match &m.weirdness_message {
        Some(msg) => println!("⚠️  Weirdness: {}", msg),
        None => println!("✅ No anomalies detected."),
    }
}

pub fn ball(samples: usize, level: PlayerLevel, data: &BallData, result: &ScoreResult) {
    println!("\n⚾ === BALL METRICS: {} swings ({}) === ⚾", samples, level);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("EV90").fg(Color::Cyan),
        Cell::new("LA90"),
        Cell::new("LA SD"),
        Cell::new("Barrel %"),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("State"),
    ]);
    table.add_row(vec![
        Cell::new(fmt_opt(data.ev90, 1)),
        Cell::new(fmt_opt(data.la90, 1)),
        Cell::new(fmt_opt(data.la_sd, 2)),
        Cell::new(fmt_opt(data.barrel_like_rate.map(|r| r * 100.0), 1)),
        Cell::new(fmt_score(result.score)).add_attribute(Attribute::Bold),
        Cell::new(&result.label).fg(state_color(result.state)),
    ]);
    println!("{}", table);
}
