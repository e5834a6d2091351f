/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::info;

/* Custom libraries */
use elevator_sim::config;
use elevator_sim::unwrap_or_exit;
use elevator_sim::{Simulation, TickTrace};

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-sim")
        .about("Discrete-time single elevator simulation")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Scenario file")
                .takes_value(true)
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("ticks")
                .short('t')
                .long("ticks")
                .value_name("N")
                .help("Number of ticks to simulate, overrides the scenario")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the final report as JSON"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print the per-tick trace"),
        )
        .get_matches();

    // Load the scenario
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path), "Failed to load scenario");

    let ticks = match matches.value_of("ticks") {
        Some(ticks) => unwrap_or_exit!(ticks.parse::<i64>(), "Invalid tick count"),
        None => config.simulation.ticks,
    };

    // Build the simulation and hook up the trace stream
    let mut simulation = unwrap_or_exit!(Simulation::from_config(&config), "Invalid scenario");
    let trace_rx = if matches.is_present("quiet") {
        None
    } else {
        let (trace_tx, trace_rx) = cbc::unbounded::<TickTrace>();
        simulation.set_trace_sink(trace_tx);
        Some(trace_rx)
    };

    info!(
        "Running {} ticks over {} floors with {} requests",
        ticks,
        simulation.n_floors(),
        simulation.requests().len()
    );

    // Run, printing the trace tick by tick
    for _ in 0..ticks.max(0) {
        simulation.next_decision();
        if let Some(trace_rx) = &trace_rx {
            for trace in trace_rx.try_iter() {
                println!("{}", trace);
            }
        }
    }

    // Final state
    let report = simulation.report();
    if matches.is_present("json") {
        let json = unwrap_or_exit!(serde_json::to_string_pretty(&report), "Failed to encode report");
        println!("{}", json);
        return;
    }

    println!(
        "Finished at tick {} on floor {} ({})",
        report.tick, report.floor, report.policy
    );
    for (index, request) in report.requests.iter().enumerate() {
        match request.arrival() {
            Some(arrival) => println!(
                "  #{} {} -> {} created {} arrived {}",
                index,
                request.origin(),
                request.destination(),
                request.created_at(),
                arrival
            ),
            None => println!(
                "  #{} {} -> {} created {} outstanding",
                index,
                request.origin(),
                request.destination(),
                request.created_at()
            ),
        }
    }
    match report.mean_turnaround {
        Some(mean) => println!(
            "Serviced {} of {} requests, mean turnaround {:.2} ticks",
            report.serviced_count,
            report.requests.len(),
            mean
        ),
        None => println!("Serviced 0 of {} requests", report.requests.len()),
    }
}
