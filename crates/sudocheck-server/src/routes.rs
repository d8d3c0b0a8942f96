//! API routes and request validation.
//!
//! Validation is strictly ordered and short-circuits at the first failing
//! check: missing fields, then value shape, then puzzle shape, then
//! coordinate shape. The order is observable through which error message a
//! multi-invalid request gets, so it must not be rearranged. Note that the
//! boundary checks the raw puzzle alphabet before the cleaned length, while
//! the codec checks length first; both orders are intentional.

use std::str::FromStr as _;

use axum::{Json, Router, routing::post};
use serde_json::{Value, json};
use sudocheck_core::{Board, Coordinate};

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/check", post(check))
}

async fn solve(Json(body): Json<Value>) -> Json<Value> {
    Json(solve_response(&body))
}

async fn check(Json(body): Json<Value>) -> Json<Value> {
    Json(check_response(&body))
}

/// Handles `POST /api/solve` bodies.
fn solve_response(body: &Value) -> Value {
    let puzzle = body.get("puzzle");
    if puzzle.is_none_or(is_blank) {
        log::debug!("solve rejected: missing puzzle field");
        return error("Required field missing");
    }
    let Some(puzzle) = puzzle.and_then(Value::as_str) else {
        return error("Invalid characters in puzzle");
    };
    if has_invalid_chars(puzzle) {
        return error("Invalid characters in puzzle");
    }
    match sudocheck_solver::solve(puzzle) {
        Ok(solution) => json!({ "solution": solution }),
        Err(err) => {
            log::debug!("solve rejected: {err}");
            error(&err.to_string())
        }
    }
}

/// Handles `POST /api/check` bodies.
fn check_response(body: &Value) -> Value {
    let puzzle = body.get("puzzle").filter(|v| !is_blank(v));
    let coordinate = body.get("coordinate").filter(|v| !is_blank(v));
    let value = body.get("value");
    let (Some(puzzle), Some(coordinate), Some(value)) = (puzzle, coordinate, value) else {
        log::debug!("check rejected: missing field(s)");
        return error("Required field(s) missing");
    };
    log::debug!("check request: coordinate={coordinate} value={value}");

    let Some(value) = candidate_value(value) else {
        return error("Invalid value");
    };
    let Some(puzzle) = puzzle.as_str() else {
        return error("Invalid characters in puzzle");
    };
    if has_invalid_chars(puzzle) {
        return error("Invalid characters in puzzle");
    }
    let board = match Board::from_puzzle(puzzle) {
        Ok(board) => board,
        Err(err) => return error(&err.to_string()),
    };
    let Some(coordinate) = coordinate
        .as_str()
        .and_then(|s| Coordinate::from_str(s).ok())
    else {
        return error("Invalid coordinate");
    };

    // A value identical to the cell's current content is accepted without
    // computing conflicts; the predicates do not exclude the target cell.
    if board.get(coordinate.row(), coordinate.col()) == value {
        return json!({ "valid": true });
    }

    let conflicts = board.conflicts(coordinate.row(), coordinate.col(), value);
    if conflicts.is_empty() {
        json!({ "valid": true })
    } else {
        json!({
            "valid": false,
            "conflict": conflicts.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        })
    }
}

/// Parses the candidate value: an integer 1-9, as a JSON number or a string.
fn candidate_value(value: &Value) -> Option<u8> {
    let n = match value {
        Value::String(s) => s.parse::<i64>().ok()?,
        Value::Number(n) => n.as_i64()?,
        _ => return None,
    };
    u8::try_from(n).ok().filter(|v| (1..=9).contains(v))
}

/// `true` for JSON null and the empty string. Absent fields are handled by
/// the callers; a blank present field counts as missing all the same.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn has_invalid_chars(puzzle: &str) -> bool {
    puzzle.chars().any(|c| !matches!(c, '1'..='9' | '.'))
}

fn error(message: &str) -> Value {
    json!({ "error": message })
}
