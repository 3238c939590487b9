mod common;

use common::*;
use tasklens_decode::registry::DEFAULT_IGNORED_TAGS;
use tasklens_decode::{ArgType, CodeKey};

const NARROW: &str = r#"<Action sr="act0"><code>9000</code>
    <Str sr="arg0">a</Str><Int sr="arg1" val="1"/>
</Action>"#;

const WIDE: &str = r#"<Action sr="act0"><code>9000</code>
    <Int sr="arg4" val="4"/><Str sr="arg0">a</Str><Int sr="arg1" val="1"/>
    <Str sr="arg3">d</Str><Str sr="arg2">c</Str>
</Action>"#;

fn observe(registry: &mut Registry, xml: &str) -> Registration {
    let doc = roxmltree::Document::parse(xml).expect("parse record");
    registry.register_or_upgrade(
        CodeKey::new("9000", RecordKind::Task),
        doc.root_element(),
        DEFAULT_IGNORED_TAGS,
    )
}

fn slot_count(registry: &Registry) -> usize {
    registry
        .lookup(&CodeKey::new("9000", RecordKind::Task))
        .map_or(0, |entry| entry.slot_count())
}

#[test]
fn narrow_then_wide_upgrades() {
    let mut registry = Registry::empty();
    assert_eq!(observe(&mut registry, NARROW), Registration::Inserted { slots: 2 });
    assert_eq!(
        observe(&mut registry, WIDE),
        Registration::Upgraded { from: 2, to: 5 }
    );
    assert_eq!(slot_count(&registry), 5);
}

#[test]
fn wide_then_narrow_keeps_wide() {
    let mut registry = Registry::empty();
    assert_eq!(observe(&mut registry, WIDE), Registration::Inserted { slots: 5 });
    assert_eq!(observe(&mut registry, NARROW), Registration::Kept);
    assert_eq!(slot_count(&registry), 5);
}

#[test]
fn inferred_slots_follow_positional_suffix() {
    let mut registry = Registry::empty();
    observe(&mut registry, WIDE);
    let entry = registry
        .lookup(&CodeKey::new("9000", RecordKind::Task))
        .expect("inferred entry");
    assert!(entry.inferred);
    assert_eq!(entry.display_name, "Unmapped action code 9000");
    assert_eq!(entry.arg_slots, vec!["arg0", "arg1", "arg2", "arg3", "arg4"]);
    assert_eq!(
        entry.arg_types,
        vec![ArgType::Str, ArgType::Int, ArgType::Str, ArgType::Str, ArgType::Int]
    );
}

#[test]
fn unknown_code_renders_inferred_arguments_after_observation() {
    let mut engine = plain_engine();
    let lines = render_task(&mut engine, &format!("<Task sr=\"task1\">{WIDE}</Task>"));
    assert_eq!(
        lines,
        vec!["Unmapped action code 9000: a, arg1=1, c, d, arg4=4"]
    );
}

#[test]
fn static_entry_widens_but_keeps_its_name_and_templates() {
    let mut engine = plain_engine();
    let lines = render_task(
        &mut engine,
        r#"<Task sr="task1"><Action sr="act0"><code>548</code>
            <Str sr="arg0">hi</Str><Int sr="arg1" val="1"/><Str sr="arg2">extra</Str>
        </Action></Task>"#,
    );
    assert_eq!(lines, vec!["Flash: hi, Long, extra"]);

    let narrow = render_task(
        &mut engine,
        r#"<Task sr="task2"><Action sr="act0"><code>548</code><Str sr="arg0">again</Str></Action></Task>"#,
    );
    assert_eq!(narrow, vec!["Flash: again"]);
    let flash = engine
        .registry()
        .lookup(&CodeKey::new("548", RecordKind::Task))
        .expect("Flash");
    assert_eq!(flash.slot_count(), 3);
    assert!(!flash.inferred);
}

#[test]
fn redirected_entry_upgrades_against_target_shape() {
    let mut engine = plain_engine();
    let doc = roxmltree::Document::parse(
        r#"<Action sr="act0"><code>890</code>
            <Str sr="arg0">%n</Str><Int sr="arg1" val="1"/><Int sr="arg2" val="10"/>
        </Action>"#,
    )
    .expect("parse record");
    assert_eq!(
        engine.observe(doc.root_element(), RecordKind::Task),
        Registration::Kept
    );
    let subtract = engine
        .registry()
        .lookup(&CodeKey::new("890", RecordKind::Task))
        .expect("Variable Subtract");
    assert!(subtract.redirect.is_some());
}

const WAIT_UNTIL_CONDITION: &str = r#"<ConditionList sr="if">
    <Condition sr="c0"><lhs>%x</lhs><op>0</op><rhs>1</rhs></Condition>
</ConditionList>"#;

#[test]
fn declared_condition_slot_survives_upgrade() {
    let mut engine = plain_engine();
    let lines = render_task(
        &mut engine,
        &format!(
            r#"<Task sr="task1"><Action sr="act0"><code>35</code>
                <Int sr="arg0" val="5"/><Int sr="arg1" val="1"/>
                <Int sr="arg2" val="0"/><Int sr="arg3" val="0"/>
                {WAIT_UNTIL_CONDITION}
            </Action></Task>"#
        ),
    );
    assert_eq!(
        lines,
        vec!["Wait Until: Check Every:5, Unit:s, arg2=0, arg3=0, %x = 1"]
    );
    let wait_until = engine
        .registry()
        .lookup(&CodeKey::new("35", RecordKind::Task))
        .expect("Wait Until");
    assert!(wait_until.has_condition_slot());
    assert_eq!(wait_until.argument_slot_count(), 4);
}

#[test]
fn one_extra_argument_beside_a_condition_slot_upgrades() {
    let mut engine = plain_engine();
    let xml = format!(
        r#"<Action sr="act0"><code>35</code>
            <Int sr="arg0" val="5"/><Int sr="arg1" val="1"/><Str sr="arg2">extra</Str>
            {WAIT_UNTIL_CONDITION}
        </Action>"#
    );
    let doc = roxmltree::Document::parse(&xml).expect("parse record");
    assert_eq!(
        engine.observe(doc.root_element(), RecordKind::Task),
        Registration::Upgraded { from: 2, to: 3 }
    );
    let rendered = engine.decoder().decode(doc.root_element(), RecordKind::Task);
    assert_eq!(rendered.primary(), "Wait Until: Check Every:5, Unit:s, extra, %x = 1");
}

#[test]
fn condition_only_entry_is_kept() {
    let mut engine = plain_engine();
    let xml = format!(r#"<Action sr="act0"><code>43</code>{WAIT_UNTIL_CONDITION}</Action>"#);
    let doc = roxmltree::Document::parse(&xml).expect("parse record");
    assert_eq!(
        engine.observe(doc.root_element(), RecordKind::Task),
        Registration::Kept
    );
}
