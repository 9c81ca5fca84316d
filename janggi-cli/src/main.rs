//! 将棋对局的交互式控制台
//!
//! 命令:
//! - `move <from> <to>`  走子，坐标形如 a1 到 i10
//! - `swap <a> <b>`      开局换象马（仅第一手之前）
//! - `board`             重新打印棋盘
//! - `check`             查询双方将的受攻状态
//! - `json`              输出只读快照
//! - `reset`             重开一局
//! - `quit`              退出

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use engine::{render, BoardSnapshot, Coord, Game, GameResult, Side};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("janggi_cli=info".parse()?),
        )
        .init();

    info!("将棋对局启动");

    let mut game = Game::new();
    print_board(&game);
    print_prompt(&game)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["move", from, to] | [from, to] => {
                if game.submit_move_text(from, to) {
                    print_board(&game);
                    announce_result(&game);
                } else {
                    println!("走法被拒绝: {} -> {}", from, to);
                }
            }
            ["swap", a, b] => match (a.parse::<Coord>(), b.parse::<Coord>()) {
                (Ok(first), Ok(second)) => {
                    game.swap_pieces(first, second);
                    print_board(&game);
                }
                _ => println!("坐标非法: {} {}", a, b),
            },
            ["board"] => print_board(&game),
            ["check"] => {
                for side in [Side::Red, Side::Blue] {
                    println!("{}: {}", side.as_str(), game.is_in_check(side));
                }
            }
            ["json"] => {
                let snapshot = BoardSnapshot::capture(&game);
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            ["reset"] => {
                game.reset();
                print_board(&game);
            }
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => print_help(),
        }

        if game.game_result() == GameResult::Unfinished {
            print_prompt(&game)?;
        } else {
            print!("> ");
            io::stdout().flush()?;
        }
    }

    Ok(())
}

fn print_board(game: &Game) {
    println!("{}", render(game.board()));
}

fn print_prompt(game: &Game) -> Result<()> {
    let summary = game.turn_summary();
    print!(
        "[{} 第 {} 手] > ",
        summary.current.as_str(),
        summary.move_number
    );
    io::stdout().flush()?;
    Ok(())
}

fn announce_result(game: &Game) {
    match game.game_result() {
        GameResult::RedWon => println!("红方胜!"),
        GameResult::BlueWon => println!("蓝方胜!"),
        GameResult::Unfinished => {}
    }
}

fn print_help() {
    println!("命令: move <from> <to> | swap <a> <b> | board | check | json | reset | quit");
}
