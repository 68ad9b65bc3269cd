//! Robot Patrol State Machine
//!
//! This example drives a bump-and-turn patrol from a transition table.
//!
//! Key concepts:
//! - Behavior lives in the table, not in the engine
//! - Conditions read simulated sensors through a callback
//! - Actions drive simulated motors through a callback
//! - One execute() call per control-loop tick
//!
//! Run with: RUST_LOG=debug cargo run --example robot_patrol

use statetable::core::{ActionId, ConditionId, StateId, ELSE, HALT};
use statetable::{transitions, MachineBuilder, Step};
use std::cell::Cell;
use tracing_subscriber::EnvFilter;

const FORWARD: StateId = 0;
const BACK_OFF: StateId = 1;
const TURN: StateId = 2;

const BUMPER: ConditionId = 0;
const CLEAR: ConditionId = 1;
const BATTERY_LOW: ConditionId = 2;

const DRIVE: ActionId = 0;
const REVERSE: ActionId = 1;
const ROTATE: ActionId = 2;
const STOP: ActionId = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Robot Patrol State Machine ===\n");

    let tick = Cell::new(0u32);

    let mut machine = MachineBuilder::new()
        .records(transitions![
            FORWARD, BATTERY_LOW => STOP(0) => HALT;
            FORWARD, BUMPER => REVERSE(200) => BACK_OFF;
            FORWARD, ELSE => DRIVE(255) => FORWARD;
            BACK_OFF, ELSE => ROTATE(90) => TURN;
            TURN, CLEAR => DRIVE(255) => FORWARD;
        ])
        .initial(FORWARD)
        .on_condition(|condition| {
            let now = tick.get();
            match condition {
                BUMPER => now == 3,
                CLEAR => now >= 6,
                BATTERY_LOW => now >= 9,
                _ => false,
            }
        })
        .on_action(|action| {
            let name = match action {
                DRIVE => "drive",
                REVERSE => "reverse",
                ROTATE => "rotate",
                STOP => "stop",
                _ => "unknown",
            };
            println!("  motor command: {name}");
        })
        .build()
        .unwrap();

    loop {
        println!("tick {} in state {}", tick.get(), machine.state());
        match machine.execute() {
            Step::Halted => break,
            Step::Idle => println!("  waiting"),
            Step::Transitioned { to, record, .. } => {
                println!("  -> state {to} (param {})", record.param)
            }
        }
        tick.set(tick.get() + 1);
    }

    println!("\nRobot halted after {} ticks", tick.get());
    println!("\n=== Example Complete ===");
}
