mod common;

use common::*;
use expect_test::expect;
use tasklens_decode::ThemeRole;

fn html_engine() -> Engine {
    Engine::new(RenderConfig::html()).expect("static registry validates")
}

#[test]
fn html_line_escapes_and_styles_each_part() {
    let rendered = decode_with(
        &html_engine(),
        r#"<Action sr="act0"><code>548</code><label>a &lt; b</label><Str sr="arg0">Tom &amp; Jerry</Str></Action>"#,
        RecordKind::Task,
    );
    expect![[r#"<b><span style="color:DarkOrange">Flash</span></b>: <span style="color:SlateGray">Tom &amp; Jerry</span> <span style="color:MediumOrchid">with label: a &lt; b</span>"#]]
    .assert_eq(rendered.primary());
}

#[test]
fn html_diagnostics_use_their_own_role() {
    let rendered = decode_with(
        &html_engine(),
        r#"<Action sr="act0"><code>905</code><Int sr="arg0" val="9"/></Action>"#,
        RecordKind::Task,
    );
    expect![[r#"<b><span style="color:DarkOrange">Location Mode</span></b>: <span style="color:Red">Mode:[unresolved 905[9]]</span>"#]]
    .assert_eq(rendered.primary());
}

#[test]
fn html_task_indents_with_entities() {
    let mut engine = html_engine();
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task1">
            <Action sr="act1"><code>548</code><Str sr="arg0">hi</Str></Action>
            <Action sr="act0"><code>37</code>
                <ConditionList sr="if"><Condition sr="c0"><lhs>%x</lhs><op>0</op><rhs>1</rhs></Condition></ConditionList>
            </Action>
            <Action sr="act2"><code>38</code></Action>
        </Task>"#,
    );
    insta::assert_snapshot!(lines.join("\n"), @r#"
    <b><span style="color:DarkOrange">If</span></b>: <span style="color:SlateGray">%x = 1</span>
    &nbsp;&nbsp;&nbsp;&nbsp;<b><span style="color:DarkOrange">Flash</span></b>: <span style="color:SlateGray">hi</span>
    <b><span style="color:DarkOrange">End If</span></b>
    "#);
}

#[test]
fn html_continuations_stay_balanced() {
    let rendered = decode_with(
        &html_engine(),
        "<Action sr=\"act0\"><code>129</code><Str sr=\"arg0\">let a = 1;\nflash(a);</Str></Action>",
        RecordKind::Task,
    );
    insta::assert_snapshot!(rendered.lines.join("\n"), @r#"
    <b><span style="color:DarkOrange">JavaScriptlet</span></b>: <span style="color:SlateGray">Code:</span>
    <span style="color:DimGray">... </span><span style="color:SlateGray">let a = 1;</span>
    <span style="color:DimGray">... </span><span style="color:SlateGray">flash(a);</span>
    "#);
}

#[test]
fn theme_overrides_reach_rendered_spans() {
    let mut config = RenderConfig::html();
    config.theme.set(ThemeRole::ActionName, "#123456");
    let engine = Engine::new(config).expect("static registry validates");
    let rendered = decode_with(
        &engine,
        r#"<Action sr="act0"><code>38</code></Action>"#,
        RecordKind::Task,
    );
    assert_eq!(
        rendered.primary(),
        r##"<b><span style="color:#123456">End If</span></b>"##
    );
}
