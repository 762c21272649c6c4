use crate::config::*;
use crate::console::*;

const GRID_PROMPTS: &str = "Enter the number of rows and columns in the grid: \
                            Enter the monkey's coordinates (x y): \
                            Enter the banana's coordinates (x y): ";

type Outcome = (Result<SessionStatus, InputError>, String);

fn run_grid(input: &str, options: GridSessionOptions) -> Outcome {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let result = grid_session(&mut console, options);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

fn run_queens(input: &str) -> Outcome {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let result = queens_session(&mut console);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

#[test]
fn reads_tokens_across_lines() {
    let mut console = Console::new("  3\n\n-4   5\n".as_bytes(), Vec::new());
    assert_eq!(console.read_i64("a").unwrap(), 3);
    assert_eq!(console.read_i64("b").unwrap(), -4);
    assert_eq!(console.read_i64("c").unwrap(), 5);
    match console.read_i64("d") {
        Err(InputError::UnexpectedEof { expected }) => assert_eq!(expected, "d"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn reaches_goal() {
    let (result, output) = run_grid("5 5\n0 0\n4 4\n", Default::default());
    assert_eq!(result.unwrap(), SessionStatus::Completed);
    assert_eq!(output, format!("{}reached goal with cost 8\n", GRID_PROMPTS));
}

#[test]
fn already_at_goal() {
    let (result, output) = run_grid("3 3 1 1 1 1", Default::default());
    assert_eq!(result.unwrap(), SessionStatus::Completed);
    assert!(output.ends_with("reached goal with cost 0\n"));
}

#[test]
fn shows_path() {
    let options = GridSessionOptions {
        config: SearchConfig {
            frontier_policy: FrontierPolicy::DiscardStale,
        },
        show_path: true,
    };
    let (result, output) = run_grid("2 2\n0 0\n1 1\n", options);
    assert_eq!(result.unwrap(), SessionStatus::Completed);
    assert!(output.ends_with(
        "reached goal with cost 2\n\
         path: (0, 0) -> (0, 1) -> (1, 1)\n"
    ));
}

#[test]
fn goal_outside_grid_is_invalid() {
    let (result, output) = run_grid("2 2\n0 0\n5 5\n", Default::default());
    let status = result.unwrap();
    assert_eq!(status, SessionStatus::InvalidInput);
    assert_eq!(status.exit_code(), 1);
    assert!(output.ends_with("invalid input: goal is outside the grid\n"));
}

#[test]
fn negative_start_is_invalid() {
    let (result, output) = run_grid("4 4\n-1 2\n0 0\n", Default::default());
    assert_eq!(result.unwrap(), SessionStatus::InvalidInput);
    assert!(output.ends_with("invalid input: start is outside the grid\n"));
}

#[test]
fn huge_coordinate_is_invalid() {
    let (result, output) = run_grid("4 4\n99999999999 2\n0 0\n", Default::default());
    assert_eq!(result.unwrap(), SessionStatus::InvalidInput);
    assert!(output.ends_with("invalid input: start is outside the grid\n"));
}

#[test]
fn huge_grid_adjacent_cells() {
    let (result, output) = run_grid("200000 200000\n0 0\n1 0\n", Default::default());
    assert_eq!(result.unwrap(), SessionStatus::Completed);
    assert!(output.ends_with("reached goal with cost 1\n"));
}

#[test]
fn empty_grid_is_invalid() {
    let (result, output) = run_grid("0 4\n0 0\n0 0\n", Default::default());
    assert_eq!(result.unwrap(), SessionStatus::InvalidInput);
    assert!(output.ends_with("invalid input: grid must have at least one row and one column\n"));
}

#[test]
fn malformed_number_fails_fast() {
    let (result, output) = run_grid("5 x\n0 0\n4 4\n", Default::default());
    match result {
        Err(InputError::Malformed { expected, token }) => {
            assert_eq!(expected, "columns");
            assert_eq!(token, "x");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(output, "Enter the number of rows and columns in the grid: ");
}

#[test]
fn truncated_input_fails_fast() {
    let (result, _) = run_grid("5 5\n0", Default::default());
    match result {
        Err(err @ InputError::UnexpectedEof { .. }) => {
            assert_eq!(err.to_string(), "input ended while reading monkey y");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn queens_solution() {
    let (result, output) = run_queens("4\n");
    assert_eq!(result.unwrap().exit_code(), 0);
    assert_eq!(
        output,
        "Enter the value of N: Solution for N = 4:\n\
         . Q . . \n\
         . . . Q \n\
         Q . . . \n\
         . . Q . \n"
    );
}

#[test]
fn queens_no_solution() {
    let (result, output) = run_queens("3");
    assert_eq!(result.unwrap(), SessionStatus::Completed);
    assert!(output.ends_with("No solution found for N = 3\n"));
}

#[test]
fn queens_rejects_out_of_range_n() {
    for input in &["0", "-2", "21", "4611686018427387904"] {
        let (result, output) = run_queens(input);
        assert_eq!(result.unwrap(), SessionStatus::InvalidInput);
        assert!(output.ends_with("invalid input: N must be between 1 and 20\n"));
    }
}

#[test]
fn queens_malformed_n() {
    let (result, _) = run_queens("four");
    assert!(matches!(result, Err(InputError::Malformed { .. })));
}

#[test]
fn oversized_grid_is_clamped() {
    let input = "4294967295 3\n2147483646 0\n2147483646 2\n";
    let (result, output) = run_grid(input, Default::default());
    assert_eq!(result.unwrap(), SessionStatus::Completed);
    assert!(output.ends_with("reached goal with cost 2\n"));
}
