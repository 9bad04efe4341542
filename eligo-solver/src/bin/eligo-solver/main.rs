mod instance;
mod os_signal_termination;
mod result;

use std::io::Write;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eligo_core::asserts::ELIGO_ASSERT_LEVEL_DEFINITION;
use eligo_core::asserts::ELIGO_ASSERT_MODERATE;
use eligo_core::convert_case::Case;
use eligo_core::results::Schedule;
use eligo_core::results::ScheduleResult;
use eligo_core::statistics::configure_statistic_logging;
use eligo_core::termination::Combinator;
use eligo_core::termination::NodeBudget;
use eligo_core::termination::TimeBudget;
use eligo_core::SearchMode;
use eligo_core::Solver;
use eligo_core::SolverOptions;
use instance::parse_instance;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::EligoResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve.
    ///
    /// The first line holds the number of machines; every further line is a job, written as
    /// 'duration: m0 m1 ...'. A job without a machine list (or with '*') may run on any machine.
    /// Everything after '#' is a comment.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The number of milliseconds the search may take.
    ///
    /// When it runs out, the best schedule found so far is printed without a proof of optimality.
    ///
    /// Possible values: u64
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// The number of search nodes the search may open.
    ///
    /// Possible values: u64
    #[arg(long = "node-limit")]
    node_limit: Option<u64>,

    /// Whether to prove optimality or to stop at the first schedule.
    #[arg(long, value_enum, default_value_t)]
    search_mode: SearchMode,

    /// Branch on every candidate machine, even when it is interchangeable with one already tried.
    #[arg(long)]
    no_symmetry_breaking: bool,

    /// Only check machines pairwise instead of reasoning over task intervals.
    #[arg(long)]
    no_edge_finding: bool,

    /// Print every improving schedule instead of only the final one.
    #[arg(short = 'a', long = "all-solutions")]
    all_solutions: bool,

    /// Enables logging of the progress of the search.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Log the statistics of the search once it concludes.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%%", Some(Case::Snake));
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> EligoResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    if ELIGO_ASSERT_LEVEL_DEFINITION >= ELIGO_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the Eligo assert level is set to {ELIGO_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active."
        );
    }

    let source = std::fs::read_to_string(&args.instance_path)?;
    let problem = parse_instance(&source)?.into_problem()?;

    let options = SolverOptions {
        search_mode: args.search_mode,
        symmetry_breaking: !args.no_symmetry_breaking,
        edge_finding: !args.no_edge_finding,
    };
    let mut solver = Solver::with_options(options);

    let time_budget = args
        .time_limit
        .map(|limit| TimeBudget::starting_now(Duration::from_millis(limit)));
    let node_budget = args.node_limit.map(NodeBudget::new);
    let mut termination = Combinator::new(
        os_signal_termination::install()?,
        Combinator::new(time_budget, node_budget),
    );

    let all_solutions = args.all_solutions;
    let result = solver.solve_with_callback(&problem, &mut termination, |schedule: &Schedule| {
        if all_solutions {
            println!("{schedule}");
            println!("----------");
        }
        ControlFlow::Continue(())
    })?;

    println!("Status: {}", result.status());
    match &result {
        ScheduleResult::Optimal(schedule) => println!("{schedule}"),
        ScheduleResult::FeasibleNotProven(schedule) => {
            warn!("The search stopped before the schedule was proven optimal");
            println!("{schedule}");
        }
        ScheduleResult::Infeasible => println!("No feasible solution found."),
        ScheduleResult::TimedOutNoSolution => println!("Timeout: no solution found."),
    }

    solver.log_statistics();

    Ok(())
}
