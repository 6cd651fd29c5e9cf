use crate::infra::{parse_resolution, scoring_service};
use candidate_fit::config::InferenceConfig;
use candidate_fit::error::AppError;
use candidate_fit::fuzzy::{CandidateSignals, FitOutcome};
use candidate_fit::scoring::{BatchScorer, FitReport, FitScoringService};
use chrono::Local;
use clap::Args;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Years of relevant experience
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) experience: f64,
    /// Percentage of required skills the candidate has (0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) skill_match: f64,
    /// Education level (1-5)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) education: f64,
    /// Academic score on a 0-10 scale
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) cgpa: f64,
    /// Number of completed projects
    #[arg(long)]
    pub(crate) projects: u32,
    /// Sampling step of the output universe (defaults to 1.0)
    #[arg(long, value_parser = parse_resolution)]
    pub(crate) resolution: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with columns candidate,experience,skill_match,education,cgpa,projects
    pub(crate) input: PathBuf,
    /// Sampling step of the output universe (defaults to 1.0)
    #[arg(long, value_parser = parse_resolution)]
    pub(crate) resolution: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the firing strength of every rule for each sample candidate
    #[arg(long)]
    pub(crate) show_rules: bool,
}

fn service_for(resolution: Option<f64>) -> Result<FitScoringService, AppError> {
    let config = resolution
        .map(|resolution| InferenceConfig { resolution })
        .unwrap_or_default();
    scoring_service(&config)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        experience,
        skill_match,
        education,
        cgpa,
        projects,
        resolution,
    } = args;

    let service = service_for(resolution)?;
    let report = service
        .score_signals(CandidateSignals {
            experience,
            skill_match,
            education,
            cgpa,
            projects,
        })?;

    render_report("Candidate", &report, true);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = service_for(args.resolution)?;
    let file = std::fs::File::open(&args.input)?;
    let stdout = io::stdout();

    let summary = BatchScorer::new(service.engine()).score_to_writer(file, stdout.lock())?;
    eprintln!(
        "Scored {} candidate(s); {} without any firing rule",
        summary.scored, summary.no_rule_fired
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = service_for(None)?;

    println!("Candidate fit demo ({})", Local::now().format("%Y-%m-%d %H:%M"));
    for (name, signals) in sample_candidates() {
        let report = service.score_signals(signals)?;
        render_report(name, &report, args.show_rules);
    }

    Ok(())
}

fn sample_candidates() -> Vec<(&'static str, CandidateSignals)> {
    let candidate = |experience, skill_match, education, cgpa, projects| CandidateSignals {
        experience,
        skill_match,
        education,
        cgpa,
        projects,
    };

    vec![
        ("Senior specialist", candidate(8.0, 90.0, 4.0, 8.0, 3)),
        ("Graduate with projects", candidate(0.0, 85.0, 4.0, 9.0, 5)),
        ("Career switcher", candidate(2.0, 60.0, 3.0, 7.5, 4)),
        ("Unrelated background", candidate(0.0, 10.0, 2.0, 3.0, 0)),
    ]
}

fn render_report(name: &str, report: &FitReport, show_rules: bool) {
    let inputs = &report.inputs;
    println!("\n{name}");
    println!(
        "- inputs: experience {}, skill match {}%, education {}, cgpa {}, projects {}",
        inputs.experience, inputs.skill_match, inputs.education, inputs.cgpa, inputs.projects
    );
    println!("- profile strength: {:.2}", report.profile_strength);
    println!("- fit score: {}", report.summary());

    if report.outcome == FitOutcome::NoRuleFired {
        println!("- note: inputs fall outside every rule; score is the fallback value");
    }

    if show_rules {
        for rule in &report.rules {
            println!(
                "  rule {}: {} -> {} [{:.3}]",
                rule.rule, rule.antecedent, rule.consequent, rule.strength
            );
        }
    }
}
