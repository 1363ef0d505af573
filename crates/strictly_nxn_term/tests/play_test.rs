//! Tests for the interactive game loop.

use strictly_nxn::{Game, GameConfig, Outcome};
use strictly_nxn_term::{Input, Screen, play};
use tokio::sync::mpsc;

async fn run(game: &mut Game, inputs: Vec<Input>) -> (Outcome, String) {
    let (tx, rx) = mpsc::channel(inputs.len().max(1));
    for input in inputs {
        tx.send(input).await.expect("Channel open");
    }
    drop(tx);

    let mut out = Vec::new();
    let outcome = play(game, rx, &mut out, &Screen::new(false, false))
        .await
        .expect("Game loop succeeds");
    (outcome, String::from_utf8(out).expect("Plain text output"))
}

fn lines(items: &[&str]) -> Vec<Input> {
    items.iter().map(|s| Input::Line(s.to_string())).collect()
}

#[tokio::test]
async fn test_plays_to_a_win() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let (outcome, text) = run(&mut game, lines(&["1,1", "1,2", "2,2", "2,1", "3,3"])).await;

    assert_eq!(outcome.winner().map(|p| p.name().as_str()), Some("Player 1"));
    assert!(text.ends_with("Game Over. Player 1 wins!\n"));
}

#[tokio::test]
async fn test_rejected_input_is_flashed_and_retried() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let (_, text) = run(
        &mut game,
        lines(&["1,1", "1,1", "nope", "9,9", "1,2", "2,2", "2,1", "3,3"]),
    )
    .await;

    assert!(text.contains("Already marked. Choose another position!\n Player 2: "));
    assert!(text.contains("Make sure input is in the following format: <number>,<number>\n"));
    assert!(text.contains("Input number should be between 1 and 3.\n"));
    assert!(text.ends_with("Game Over. Player 1 wins!\n"));
}

#[tokio::test]
async fn test_interrupt_abandons() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let mut inputs = lines(&["2,2"]);
    inputs.push(Input::Interrupt);
    inputs.extend(lines(&["1,1"]));

    let (outcome, text) = run(&mut game, inputs).await;
    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(game.moves().len(), 1);
    assert!(text.ends_with("Game Over. Forced to quit.\n"));
}

#[tokio::test]
async fn test_end_of_input_abandons() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let (outcome, _) = run(&mut game, lines(&["1,1"])).await;
    assert_eq!(outcome, Outcome::Abandoned);
}

#[tokio::test]
async fn test_draw_message() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let (outcome, text) = run(
        &mut game,
        lines(&["1,1", "2,2", "1,3", "1,2", "2,1", "2,3", "3,2", "3,1"]),
    )
    .await;
    assert!(outcome.is_draw());
    assert!(text.ends_with("Game Over. It's a draw.\n"));
}
