use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use quiz_core::model::{Participant, QuizId, QuizInfo};
use services::{
    AttemptEntry, AttemptError, AttemptFlowService, AttemptSession, Clock, CompletedAttempt,
    EnvTokenProvider, PlayClient, PlayConfig, PlayError, QuestionView,
};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuizId { raw: String },
    InvalidBaseUrl { raw: String },
    InvalidPassingScore { raw: String },
    MissingBaseUrl,
    MissingQuizId,
    MissingParticipant,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuizId { raw } => write!(f, "invalid --quiz-id value: {raw}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
            ArgsError::InvalidPassingScore { raw } => {
                write!(f, "invalid --passing-score value: {raw}")
            }
            ArgsError::MissingBaseUrl => {
                write!(f, "no service URL; pass --base-url or set QUIZ_API_BASE_URL")
            }
            ArgsError::MissingQuizId => {
                write!(f, "no quiz selected; pass --quiz-id or set QUIZ_ID")
            }
            ArgsError::MissingParticipant => {
                write!(f, "participant names are required; pass --first-name and --last-name")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- --first-name <name> --last-name <name> \
         [--base-url <url>] [--quiz-id <id>] [--title <title>] [--passing-score <pct>]"
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_BASE_URL   play service base URL (overridden by --base-url)");
    eprintln!("  QUIZ_ID             quiz to attempt (overridden by --quiz-id)");
    eprintln!("  QUIZ_API_TOKEN      bearer token for the play service");
    eprintln!();
    eprintln!("During the attempt: type a choice number to select it,");
    eprintln!("'n' for next (submits from the last question), 'p' for previous, 'q' to quit.");
}

struct Args {
    base_url: Url,
    quiz_id: QuizId,
    title: String,
    first_name: String,
    last_name: String,
    passing_score: Option<u32>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut base_url = std::env::var("QUIZ_API_BASE_URL")
            .ok()
            .and_then(|raw| Url::parse(raw.trim()).ok());
        let mut quiz_id = std::env::var("QUIZ_ID")
            .ok()
            .and_then(|raw| raw.trim().parse::<QuizId>().ok());
        let mut title = String::from("Quiz");
        let mut first_name = None;
        let mut last_name = None;
        let mut passing_score = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let raw = require_value(args, "--base-url")?;
                    let parsed =
                        Url::parse(raw.trim()).map_err(|_| ArgsError::InvalidBaseUrl { raw })?;
                    base_url = Some(parsed);
                }
                "--quiz-id" => {
                    let raw = require_value(args, "--quiz-id")?;
                    let parsed = raw
                        .trim()
                        .parse::<QuizId>()
                        .map_err(|_| ArgsError::InvalidQuizId { raw })?;
                    quiz_id = Some(parsed);
                }
                "--title" => {
                    title = require_value(args, "--title")?;
                }
                "--first-name" => {
                    first_name = Some(require_value(args, "--first-name")?);
                }
                "--last-name" => {
                    last_name = Some(require_value(args, "--last-name")?);
                }
                "--passing-score" => {
                    let raw = require_value(args, "--passing-score")?;
                    let parsed = raw
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidPassingScore { raw })?;
                    passing_score = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let (Some(first_name), Some(last_name)) = (first_name, last_name) else {
            return Err(ArgsError::MissingParticipant);
        };

        Ok(Self {
            base_url: base_url.ok_or(ArgsError::MissingBaseUrl)?,
            quiz_id: quiz_id.ok_or(ArgsError::MissingQuizId)?,
            title,
            first_name,
            last_name,
            passing_score,
        })
    }
}

fn render_question(view: &QuestionView) {
    println!();
    println!("Question {} / {}", view.position, view.total);
    println!("{}", view.text);
    println!(
        "({})",
        if view.is_multiple {
            "select one or more answers"
        } else {
            "select a single answer"
        }
    );
    for (index, choice) in view.choices.iter().enumerate() {
        let mark = if choice.selected { "x" } else { " " };
        println!("  [{mark}] {}) {}", index + 1, choice.text);
    }
    let action = if view.is_last { "submit" } else { "next" };
    print!("choice number, n = {action}, p = previous, q = quit > ");
    let _ = io::stdout().flush();
}

fn print_results(completed: &CompletedAttempt) {
    let summary = &completed.summary;
    println!();
    println!("── {} ──", completed.quiz.title());
    println!(
        "score: {} / {} ({}%)",
        summary.correct(),
        summary.total(),
        summary.percentage()
    );
    println!("result: {}", if summary.passed() { "passed" } else { "failed" });
    if let Some(attempt_id) = completed.attempt_id {
        println!("attempt id: {attempt_id}");
    }
}

async fn drive_attempt(
    flow: &AttemptFlowService,
    session: &mut AttemptSession,
) -> Result<Option<CompletedAttempt>, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let view = QuestionView::from_session(session);
        render_question(&view);

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "q" | "quit" => return Ok(None),
            "p" | "prev" | "previous" => {
                session.retreat();
            }
            "n" | "next" => {
                if !view.has_answer {
                    println!("answer the question first");
                    continue;
                }
                if !view.is_last {
                    session.advance();
                    continue;
                }
                match flow.submit_current(session).await {
                    Ok(completed) => return Ok(Some(completed)),
                    Err(AttemptError::Play(PlayError::SessionExpired)) => {
                        return Err("session expired; please log in again".into());
                    }
                    Err(AttemptError::Play(PlayError::Unauthenticated)) => {
                        return Err("not authenticated; set QUIZ_API_TOKEN".into());
                    }
                    Err(err) => {
                        // transient failure: stay on the question, allow retry
                        log::warn!("submission failed: {err}");
                        println!("submission failed ({err}); 'n' to retry");
                    }
                }
            }
            _ => match input.parse::<usize>() {
                Ok(number) if (1..=view.choices.len()).contains(&number) => {
                    session.select_current(view.choices[number - 1].id)?;
                }
                _ => println!("unrecognized input: {input}"),
            },
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let quiz = QuizInfo::new(args.quiz_id, args.title, args.passing_score)?;
    let participant = Participant::new(args.first_name, args.last_name)?;

    let tokens = Arc::new(EnvTokenProvider::default());
    let client = Arc::new(PlayClient::new(PlayConfig::new(args.base_url), tokens));
    let flow = AttemptFlowService::new(Clock::default_clock(), client);

    println!("{} — {}", quiz.title(), participant.full_name());

    let mut session = flow
        .start_attempt(Some(AttemptEntry { quiz, participant }))
        .await?;

    match drive_attempt(&flow, &mut session).await? {
        Some(completed) => {
            print_results(&completed);
            Ok(())
        }
        None => {
            println!("attempt abandoned");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
