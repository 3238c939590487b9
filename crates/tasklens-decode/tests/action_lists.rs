mod common;

use common::*;
use tasklens_decode::render::canonical_order;

#[test]
fn records_render_in_positional_order() {
    let mut engine = plain_engine();
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task3">
            <Action sr="act2"><code>548</code><Str sr="arg0">C</Str></Action>
            <Action sr="act0"><code>548</code><Str sr="arg0">A</Str></Action>
            <Action sr="act1"><code>548</code><Str sr="arg0">B</Str></Action>
        </Task>"#,
    );
    assert_eq!(lines, vec!["Flash: A", "Flash: B", "Flash: C"]);
}

#[test]
fn canonical_order_is_stable_for_missing_suffixes() {
    let doc = roxmltree::Document::parse(
        r#"<Task><Action sr="x"/><Action sr="act1"/><Action/><Action sr="act0"/></Task>"#,
    )
    .expect("parse task");
    let ids = canonical_order(doc.root_element().children().filter(|n| n.is_element()))
        .into_iter()
        .map(|node| node.attribute("sr").unwrap_or("-"))
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["act0", "act1", "x", "-"]);
}

#[test]
fn if_block_indents_its_body() {
    let mut engine = plain_engine();
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task1">
            <Action sr="act0"><code>37</code>
                <ConditionList sr="if"><Condition sr="c0"><lhs>%x</lhs><op>0</op><rhs>1</rhs></Condition></ConditionList>
            </Action>
            <Action sr="act1"><code>548</code><Str sr="arg0">A</Str></Action>
            <Action sr="act2"><code>38</code></Action>
        </Task>"#,
    );
    assert_eq!(lines, vec!["If: %x = 1", "    Flash: A", "End If"]);
}

#[test]
fn nested_blocks_with_else_and_stray_closer() {
    let mut engine = plain_engine();
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task1">
            <Action sr="act0"><code>38</code></Action>
            <Action sr="act1"><code>39</code><Str sr="arg0">%item</Str><Str sr="arg1">a,b</Str></Action>
            <Action sr="act2"><code>37</code></Action>
            <Action sr="act3"><code>548</code><Str sr="arg0">yes</Str></Action>
            <Action sr="act4"><code>43</code></Action>
            <Action sr="act5"><code>548</code><Str sr="arg0">no</Str></Action>
            <Action sr="act6"><code>38</code></Action>
            <Action sr="act7"><code>40</code></Action>
        </Task>"#,
    );
    assert_eq!(
        lines,
        vec![
            "End If",
            "For: Variable:%item, Items:a,b",
            "    If",
            "        Flash: yes",
            "    Else",
            "        Flash: no",
            "    End If",
            "End For",
        ]
    );
}

#[test]
fn continuation_lines_are_capped_with_one_notice() {
    let mut engine = Engine::new(RenderConfig::plain().with_continuation_cap(2))
        .expect("static registry validates");
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task1">
            <Action sr="act0"><code>548</code><Str sr="arg0">l1&lt;br&gt;l2&lt;br&gt;l3&lt;br&gt;l4&lt;br&gt;l5</Str></Action>
        </Task>"#,
    );
    assert_eq!(
        lines,
        vec![
            "Flash: l1",
            "... l2",
            "... l3",
            "... (2 more lines not shown)",
        ]
    );
    let notices = lines.iter().filter(|line| line.contains("more lines not shown")).count();
    assert_eq!(notices, 1);
}

#[test]
fn continuation_lines_inherit_block_indent() {
    let mut engine = plain_engine();
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task1">
            <Action sr="act0"><code>37</code></Action>
            <Action sr="act1"><code>129</code><Str sr="arg0">var a = 1;
flash(a);</Str></Action>
            <Action sr="act2"><code>38</code></Action>
        </Task>"#,
    );
    assert_eq!(
        lines,
        vec![
            "If",
            "    JavaScriptlet: Code:",
            "    ... var a = 1;",
            "    ... flash(a);",
            "End If",
        ]
    );
}

#[test]
fn indentation_resets_per_task() {
    let mut engine = plain_engine();
    let unclosed = render_task(
        &mut engine,
        r#"<Task sr="task1"><Action sr="act0"><code>37</code></Action></Task>"#,
    );
    assert_eq!(unclosed, vec!["If"]);
    let next = render_task(
        &mut engine,
        r#"<Task sr="task2"><Action sr="act0"><code>548</code><Str sr="arg0">top</Str></Action></Task>"#,
    );
    assert_eq!(next, vec!["Flash: top"]);
}

#[test]
fn trailing_line_breaks_add_no_continuation() {
    let mut engine = plain_engine();
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task1">
            <Action sr="act0"><code>548</code><Str sr="arg0">hi&lt;br&gt;&lt;br&gt;</Str></Action>
            <Action sr="act1"><code>548</code><Str sr="arg0">a&lt;br&gt;&lt;br&gt;b</Str></Action>
        </Task>"#,
    );
    assert_eq!(lines, vec!["Flash: hi", "Flash: a", "... ", "... b"]);
}
