//! Server-side rendering of the quiz screen.
use discard_core::{
    escape, render, AssetCatalog, Problem, ProblemSet, QuizSession, TileId, TileProps, TILE_CSS,
};
use serde::Deserialize;

const SMALL_TILE_PX: u32 = 28;

const PAGE_CSS: &str = r#"
:root {
  color-scheme: light;
  font-family: "Noto Sans JP", "Hiragino Kaku Gothic ProN", "Yu Gothic", sans-serif;
  background-color: #f6f4ef;
  color: #1f1f1f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body { min-height: 100vh; }
main { max-width: 960px; margin: 0 auto; padding: 32px 16px; display: grid; gap: 24px; }
header h1 { font-size: 1.6rem; margin-bottom: 8px; }
.section { background: #fff; border-radius: 12px; padding: 20px; display: grid; gap: 16px; }
.problem-meta { display: flex; flex-wrap: wrap; gap: 12px; font-size: 0.95rem; }
.tile-row { display: flex; flex-wrap: wrap; gap: 4px; }
.tile-inline { display: inline-flex; align-items: center; gap: 6px; }
.action-bar { display: flex; flex-wrap: wrap; gap: 8px; }
.action-bar button, .action-bar .button {
  border: 0; border-radius: 8px; padding: 8px 16px; font: inherit;
  background: #1f6b5e; color: #fff; cursor: pointer; text-decoration: none;
}
.action-bar button:disabled { opacity: 0.5; cursor: not-allowed; }
.action-bar .secondary { background: #e4e0d6; color: #1f1f1f; }
.answer-panel { border-left: 4px solid #1f6b5e; padding-left: 12px; display: grid; gap: 8px; }
.answer-panel ul { list-style: none; }
.verdict--right { color: #1f6b5e; }
.verdict--wrong { color: #c03232; }
footer { font-size: 0.85rem; color: #666; }
"#;

/// `/quiz` query string. Missing fields mean the first problem, unrevealed,
/// nothing picked.
#[derive(Debug, Default, Deserialize)]
pub struct QuizQuery {
    pub q: Option<usize>,
    #[serde(default)]
    pub reveal: bool,
    pub pick: Option<usize>,
}

impl QuizQuery {
    pub fn session(&self, total: usize) -> QuizSession {
        let mut session = QuizSession::new(self.q.unwrap_or(0), total);
        if let Some(slot) = self.pick {
            session = session.pick(slot);
        }
        if self.reveal {
            session = session.reveal();
        }
        session
    }
}

/// Labelled with the authored token, like the hand tiles.
fn small_tile(token: &str, catalog: &AssetCatalog) -> String {
    let id = TileId::classify(token);
    render(
        &TileProps::new(id)
            .width(SMALL_TILE_PX)
            .alt(token)
            .title(id.symbol()),
        catalog,
    )
    .to_html()
}

fn hand_row(problem: &Problem, session: &QuizSession, catalog: &AssetCatalog) -> String {
    let slots: Vec<String> = (0..problem.hand.len()).map(|i| i.to_string()).collect();
    let mut out = String::new();
    for (slot, (token, id)) in problem.hand.iter().zip(problem.hand_tiles()).enumerate() {
        let mut props = TileProps::new(id)
            .state(session.tile_state(problem, slot))
            .alt(token.as_str())
            .title(id.symbol());
        if session.hand_interactive() {
            props = props.submit("pick", &slots[slot]);
        }
        out.push_str(&render(&props, catalog).to_html());
    }
    out
}

fn answer_panel(problem: &Problem, session: &QuizSession, catalog: &AssetCatalog) -> String {
    let mut out = String::from(r#"<div class="answer-panel">"#);
    match session.verdict(problem) {
        Some(true) => out.push_str(r#"<p class="verdict--right">正解！</p>"#),
        Some(false) => out.push_str(r#"<p class="verdict--wrong">不正解</p>"#),
        None => {}
    }
    out.push_str(&format!(
        r#"<strong class="tile-inline">推奨の切り牌: {}</strong><p>{}</p><ul>"#,
        small_tile(&problem.expected, catalog),
        escape(&problem.reason)
    ));
    for tip in &problem.tips {
        out.push_str(&format!("<li>・{}</li>", escape(tip)));
    }
    out.push_str("</ul></div>");
    out
}

fn hidden(name: &str, value: impl ToString) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        name,
        escape(&value.to_string())
    )
}

pub fn quiz_page(problems: &ProblemSet, catalog: &AssetCatalog, session: QuizSession) -> String {
    let total = problems.len();
    let problem = problems.get(session.index);
    let mut out = format!(
        r#"<!doctype html><html lang="ja"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>麻雀の切り方定石トレーニング</title><meta name="description" content="麻雀で何を切るかの定石問題を出題する学習アプリ。"><style>{PAGE_CSS}{TILE_CSS}</style></head><body><main>"#
    );
    out.push_str(
        "<header><h1>麻雀の切り方定石トレーニング</h1><p>巡目・局面・ドラから「何を切るか」を考える定石問題集です。答えを見る前に思考してみましょう。</p></header>",
    );

    out.push_str(r#"<section class="section"><div class="problem-meta">"#);
    out.push_str(&format!(
        r#"<span>{}</span><span>問題 {}</span><span>{}</span><span class="tile-inline">ドラ: {}</span></div>"#,
        escape(&problem.title),
        session.progress_label(total),
        escape(&problem.situation),
        small_tile(&problem.dora, catalog),
    ));

    out.push_str(&format!(
        r#"<form method="get" action="/quiz" class="tile-row">{}{}</form>"#,
        hidden("q", session.index),
        hand_row(problem, &session, catalog)
    ));

    out.push_str(r#"<div class="action-bar"><form method="get" action="/quiz">"#);
    out.push_str(&hidden("q", session.index));
    out.push_str(&hidden("reveal", true));
    if let Some(slot) = session.picked {
        out.push_str(&hidden("pick", slot));
    }
    out.push_str(&format!(
        r#"<button type="submit"{}>答えを見る</button></form>"#,
        if session.revealed { " disabled" } else { "" }
    ));
    out.push_str(&format!(
        r#"<a class="button secondary" href="/quiz?q={}">前の問題</a><a class="button secondary" href="/quiz?q={}">次の問題</a></div>"#,
        session.prev(total).index,
        session.next(total).index
    ));

    if session.revealed {
        out.push_str(&answer_panel(problem, &session, catalog));
    }
    out.push_str("</section>");

    out.push_str(
        r#"<section class="section"><h2>使い方のヒント</h2><p>牌姿を見て、スピード・打点・安全度のバランスを意識しましょう。牌をクリックして自分の答えを選んでから「答えを見る」を押すと、正誤も確認できます。</p></section><footer>作問: スピード重視 / バランス重視 / 変化重視の3パターン</footer></main></body></html>"#,
    );
    out
}
