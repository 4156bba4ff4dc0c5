//! End-to-end runs of the doubling and balanced a^n b^n c^n machines, plus the
//! configuration error paths.

use std::thread;
use turing_tape::{
    Action, Halt, StateRole, TransitionTable, TuringMachine, TuringMachineError,
};

fn doubling_machine() -> TuringMachine {
    let mut machine = TuringMachine::new();

    machine.add_state("0", false).unwrap();
    machine.add_state("1", false).unwrap();
    machine.add_state("2", false).unwrap();
    machine.add_state("H", true).unwrap();

    for digit in 0..10u32 {
        let read = char::from_digit(digit, 10).unwrap();
        let next = if digit >= 5 { "1" } else { "0" };
        let no_carry = char::from_digit((2 * digit) % 10, 10).unwrap();
        let carry = char::from_digit((2 * digit + 1) % 10, 10).unwrap();

        machine
            .add_transition("0", read, no_carry, Action::Left, next)
            .unwrap();
        machine
            .add_transition("1", read, carry, Action::Left, next)
            .unwrap();
    }
    machine
        .add_transition("0", '\0', '\0', Action::Halt, "H")
        .unwrap();
    machine
        .add_transition("1", '\0', '1', Action::Halt, "H")
        .unwrap();

    machine.set_initial_state("0").unwrap();
    machine
}

fn abc_machine() -> TuringMachine {
    let mut machine = TuringMachine::new();

    for name in ["0", "1", "2", "3", "4"] {
        machine.add_state(name, false).unwrap();
    }
    machine.add_state("5", true).unwrap();

    let rules = [
        ("0", 'a', 'A', Action::Right, "1"),
        ("1", 'a', 'a', Action::Right, "1"),
        ("1", 'B', 'B', Action::Right, "1"),
        ("1", 'b', 'B', Action::Right, "2"),
        ("2", 'b', 'b', Action::Right, "2"),
        ("2", 'C', 'C', Action::Right, "2"),
        ("2", 'c', 'C', Action::Left, "3"),
        ("3", 'C', 'C', Action::Left, "3"),
        ("3", 'b', 'b', Action::Left, "3"),
        ("3", 'B', 'B', Action::Left, "3"),
        ("3", 'a', 'a', Action::Left, "3"),
        ("3", 'A', 'A', Action::Right, "0"),
        ("0", 'B', 'B', Action::Right, "4"),
        ("4", 'B', 'B', Action::Right, "4"),
        ("4", 'C', 'C', Action::Right, "4"),
        ("4", '\0', '\0', Action::Halt, "5"),
        ("0", '\0', '\0', Action::Halt, "5"),
    ];
    for (from, read, write, action, to) in rules {
        machine.add_transition(from, read, write, action, to).unwrap();
    }

    machine.set_initial_state("0").unwrap();
    machine
}

fn is_balanced(s: &str) -> bool {
    let n = s.len() / 3;
    s.len() % 3 == 0 && *s == format!("{}{}{}", "a".repeat(n), "b".repeat(n), "c".repeat(n))
}

fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut strings = vec![String::new()];
    let mut frontier = vec![String::new()];

    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| alphabet.iter().map(move |c| format!("{prefix}{c}")))
            .collect();
        strings.extend(frontier.iter().cloned());
    }

    strings
}

#[test]
fn test_doubling_five() {
    let mut machine = doubling_machine();

    let halt = machine.run("5", 0, 0, '\0').unwrap();

    assert_eq!(halt, Halt::Action);
    assert!(machine.is_accepted().unwrap());
    assert_eq!(machine.current_state_name().unwrap(), "H");
    assert_eq!(machine.content().unwrap(), "10");
    assert_eq!(machine.content_offset().unwrap(), -1);
    assert_eq!(machine.head_position().unwrap(), -1);
    assert_eq!(machine.blank_symbol().unwrap(), '\0');
}

#[test]
fn test_doubling_range() {
    let mut machine = doubling_machine();

    for n in 0..=2000u64 {
        let input = n.to_string();
        let expected = (2 * n).to_string();

        machine.run(&input, 0, input.len() as i64 - 1, '\0').unwrap();

        assert!(machine.is_accepted().unwrap());
        assert_eq!(machine.current_state_name().unwrap(), "H");
        assert_eq!(machine.content().unwrap(), expected);
        assert_eq!(
            machine.content_offset().unwrap(),
            input.len() as i64 - expected.len() as i64
        );
        assert_eq!(machine.head_position().unwrap(), -1);
    }
}

#[test]
fn test_abc_empty_input_accepts_immediately() {
    let mut machine = abc_machine();

    machine.run("", 0, 0, '\0').unwrap();

    assert!(machine.is_accepted().unwrap());
    assert_eq!(machine.current_state_name().unwrap(), "5");
    assert_eq!(machine.content().unwrap(), "");
    assert_eq!(machine.content_offset().unwrap(), i64::MAX);
    assert_eq!(machine.head_position().unwrap(), 0);
}

#[test]
fn test_abc_accepts_and_rejects() {
    let mut machine = abc_machine();

    machine.run("abc", 0, 0, '\0').unwrap();
    assert!(machine.is_accepted().unwrap());
    assert_eq!(machine.content().unwrap(), "ABC");
    assert_eq!(machine.head_position().unwrap(), 3);

    let halt = machine.run("ab", 0, 0, '\0').unwrap();
    assert!(!machine.is_accepted().unwrap());
    assert!(matches!(halt, Halt::NoTransition { .. }));
    assert_ne!(machine.current_state_name().unwrap(), "5");
}

#[test]
fn test_abc_every_short_string() {
    let mut machine = abc_machine();

    for s in all_strings(&['a', 'b', 'c'], 7) {
        machine.run(&s, 0, 0, '\0').unwrap();

        if s.is_empty() {
            assert!(machine.is_accepted().unwrap());
        } else if is_balanced(&s) {
            assert!(machine.is_accepted().unwrap(), "{s} should be accepted");
            assert_eq!(machine.content().unwrap(), s.to_uppercase());
            assert_eq!(machine.content_offset().unwrap(), 0);
            assert_eq!(machine.head_position().unwrap(), s.len() as i64);
        } else {
            assert!(!machine.is_accepted().unwrap(), "{s} should be rejected");
            assert_ne!(machine.current_state_name().unwrap(), "5");
        }
        assert_eq!(machine.blank_symbol().unwrap(), '\0');
    }
}

#[test]
fn test_abc_long_balanced_strings() {
    let mut machine = abc_machine();

    for n in [10, 50, 120] {
        let s = format!("{}{}{}", "a".repeat(n), "b".repeat(n), "c".repeat(n));
        machine.run(&s, 0, 0, '\0').unwrap();

        assert!(machine.is_accepted().unwrap());
        assert_eq!(machine.content().unwrap(), s.to_uppercase());
    }
}

#[test]
fn test_unknown_initial_state_leaves_machine_unready() {
    let mut machine = TuringMachine::new();
    machine.add_state("0", false).unwrap();

    let result = machine.set_initial_state("X");

    assert_eq!(
        result,
        Err(TuringMachineError::UnknownState {
            role: StateRole::Initial,
            name: "X".to_string(),
        })
    );
    assert_eq!(machine.initial_state(), None);
    assert_eq!(machine.run("", 0, 0, '\0'), Err(TuringMachineError::NotReady));
}

#[test]
fn test_configuration_errors() {
    let mut machine = TuringMachine::new();
    machine.add_state("0", false).unwrap();

    assert_eq!(
        machine.add_state("0", false),
        Err(TuringMachineError::DuplicateState("0".to_string()))
    );
    assert_eq!(
        machine.add_transition("1", '0', '0', Action::Halt, "0"),
        Err(TuringMachineError::UnknownState {
            role: StateRole::Source,
            name: "1".to_string(),
        })
    );
    assert_eq!(
        machine.add_transition("0", '0', '0', Action::Halt, "1"),
        Err(TuringMachineError::UnknownState {
            role: StateRole::Destination,
            name: "1".to_string(),
        })
    );

    machine
        .add_transition("0", '0', '0', Action::Halt, "0")
        .unwrap();
    assert_eq!(
        machine.add_transition("0", '0', '0', Action::Halt, "0"),
        Err(TuringMachineError::DuplicateTransition("0".to_string(), '0'))
    );
    assert_eq!(
        machine.add_transition("", '0', '0', Action::Halt, "0"),
        Err(TuringMachineError::UnknownState {
            role: StateRole::Source,
            name: String::new(),
        })
    );
}

#[test]
fn test_shared_table_across_threads() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<TransitionTable>();

    let built = doubling_machine();
    let table: &TransitionTable = built.table();
    let inputs = ["0", "5", "49", "999", "123456"];

    let results: Vec<(String, String, i64)> = thread::scope(|scope| {
        let workers: Vec<_> = inputs
            .iter()
            .map(|&input| {
                scope.spawn(move || {
                    let mut machine = TuringMachine::with_table(table.clone());
                    machine.set_initial_state("0").unwrap();
                    machine
                        .run(input, 0, input.len() as i64 - 1, '\0')
                        .unwrap();

                    (
                        input.to_string(),
                        machine.content().unwrap(),
                        machine.head_position().unwrap(),
                    )
                })
            })
            .collect();

        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    for (input, content, head) in results {
        let n: u64 = input.parse().unwrap();
        assert_eq!(content, (2 * n).to_string());
        assert_eq!(head, -1);
    }
    assert_eq!(built.table().transition_count(), 22);
}
