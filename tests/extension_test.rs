mod common;
use common::*;
use vault::lang::ErrorCode;
use vault::mach::Halt;
use vault::world::{self, Heading, Robot, Tile};

#[test]
fn test_mark_and_goto() {
    let mut r = map_robot("#>...#");
    let mut p = extended("MARK/MOVE/MOVE/GOTO/GOTO/GOTO/GOTO");
    assert_eq!(exec(&mut p, &mut r), Halt::Completed);
    assert_eq!(p.marks(), &[(1, 0)]);
    assert_eq!(r.position(), (1, 0));
    assert_eq!(r.heading(), Heading::West);
}

#[test]
fn test_goto_without_mark() {
    let mut r = map_robot("#>...#");
    let mut p = extended("GOTO/MOVE");
    exec(&mut p, &mut r);
    assert_eq!(r.position(), (2, 0));
    assert_eq!(r.heading(), Heading::East);
}

#[test]
fn test_save_and_load_world() {
    let mut r = line_robot();
    let mut p = extended("SAVE/MOVE/PICK/LOAD");
    assert_eq!(exec(&mut p, &mut r), Halt::Completed);
    assert_eq!(r.position(), (0, 0));
    assert!(!r.has_key());
    assert_eq!(r.world().get((1, 0)), Some(Tile::Key));
}

#[test]
fn test_load_without_save() {
    let mut r = line_robot();
    let mut p = extended("LOAD/MOVE");
    exec(&mut p, &mut r);
    assert_eq!(r.position(), (1, 0));
}

#[test]
fn test_scan_and_count() {
    let mut r = Robot::new(world::corridor(), (0, 0), Heading::East);
    let mut p = extended("SCAN");
    exec(&mut p, &mut r);
    let scan = p.scan().unwrap();
    assert_eq!(scan.clear, [false, true, false, false]);
    assert!(!scan.on_key);
    let mut r = line_robot();
    let mut p = extended("COUNT");
    exec(&mut p, &mut r);
    assert_eq!(p.count(), Some(1));
}

#[test]
fn test_wait_inside_loop() {
    let mut r = line_robot();
    let mut p = extended("LOOP 2/WAIT 3/END");
    exec(&mut p, &mut r);
    assert_eq!(p.instruction_count(), 9);
    assert_eq!(r.position(), (0, 0));
}

#[test]
fn test_report() {
    let p = extended("WAIT 2/MARK/LOOP 3/MOVE/GOTO/END");
    let report = p.report();
    assert_eq!(report.total_tokens, 8);
    assert_eq!(report.distinct_tokens, 6);
    assert_eq!(report.control_structures, 1);
    assert_eq!(report.max_nesting_depth, 1);
    assert_eq!(report.complexity_score, 13);
}

#[test]
fn test_modifier_words_fault() {
    let mut r = line_robot();
    let mut p = extended("SCAN/ALL");
    let err = p.execute(&mut r).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownOpcode);
    assert_eq!(err.pc(), Some(1));
    assert!(!err.is_syntax());
    assert!(p.scan().is_some());
}
