use crate::cards::hand::Hand;
use crate::evaluation::evaluator::Evaluator;
use crate::evaluation::showdown::HandResult;
use crate::evaluation::showdown::Showdown;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Cli {
    #[command(about = "Deal one random hand and classify it", alias = "rs")]
    Single,
    #[command(about = "Deal N random hands and rank them", alias = "rm")]
    Multi {
        #[arg(long, default_value_t = 4)]
        hands: usize,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Enter hand strings interactively and rank them")]
    Prompt,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Cli::Single => Self::single(),
            Cli::Multi { hands, json } => Self::multi(hands, json),
            Cli::Prompt => Self::prompt(),
        }
    }

    fn single() -> anyhow::Result<()> {
        let hand = Hand::random(1);
        anyhow::ensure!(hand.has_valid_ranks(), "dealt invalid ranks: {}", hand);
        anyhow::ensure!(hand.has_valid_suits(), "dealt invalid suits: {}", hand);
        let ranking = Evaluator::from(&hand).ranking();
        log::info!("cards: {}", hand);
        log::info!("order: {}, category: {}", ranking.order(), ranking);
        Ok(())
    }

    fn multi(count: usize, json: bool) -> anyhow::Result<()> {
        anyhow::ensure!(count >= 1, "need at least one hand, got {}", count);
        let hands = (1..=count).map(Hand::random).collect::<Vec<Hand>>();
        let results = Showdown::rank(hands);
        match json {
            true => Ok(println!("{}", serde_json::to_string_pretty(&results)?)),
            false => Ok(Self::announce(&results)),
        }
    }

    fn prompt() -> anyhow::Result<()> {
        let count = Input::<String>::new()
            .with_prompt("Number of hands")
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<usize>() {
                    Ok(n) if n >= 1 => Ok(()),
                    Ok(_) => Err("Need at least one hand"),
                    Err(_) => Err("Enter a NUMBER"),
                }
            })
            .interact()?
            .parse::<usize>()?;
        let line = Input::<String>::new()
            .with_prompt(format!(
                "Cards for {} hands, comma separated (e.g. 3s4h5d6c7s,9H3CTSQSAS)",
                count
            ))
            .interact()?;
        let line = line.replace(' ', "");
        let inputs = line.split(',').collect::<Vec<&str>>();
        anyhow::ensure!(
            inputs.len() == count,
            "expected {} hands, got {}",
            count,
            inputs.len()
        );
        let hands = inputs
            .iter()
            .enumerate()
            .map(|(i, s)| Hand::parse(i + 1, s))
            .collect::<Result<Vec<Hand>, _>>()
            .context("invalid hand string")?;
        Ok(Self::announce(&Showdown::rank(hands)))
    }

    fn announce(results: &[HandResult]) {
        if let Some(winner) = results.first() {
            let banner = format!(
                "Congrats! Winner is hand {} with {} (order {})",
                winner.id, winner.label, winner.order
            );
            println!("{}", banner.green().bold());
        }
        for (i, result) in results.iter().enumerate() {
            let cards = result
                .cards
                .iter()
                .map(|c| c.to_string())
                .collect::<String>();
            log::info!(
                "{:>2}. hand {:>2} {} order {:>2} {}",
                i + 1,
                result.id,
                cards,
                result.order,
                result.label
            );
        }
    }
}
