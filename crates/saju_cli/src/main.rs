use clap::{Parser, Subcommand};
use serde::Serialize;

use saju_core::{
    CivilDate, EarthlyBranch, ElementShare, ElementTally, FiveElement, FourPillars, Gender,
    Pillar, analyze_elements, four_pillars, strong_element, weak_elements,
};
use saju_fortune::{
    AnnualFortunePillar, LuckCycleSegment, active_segment, age_at, annual_fortune_series,
    calculate_daeun,
};
use saju_recommend::{
    CandidateElement, ElementDistribution, ElementScore, preview_balance_change, score_candidates,
    season_for_month,
};

#[derive(Parser)]
#[command(name = "saju", about = "Saju (Four Pillars) analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth date
    Pillars {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth double-hour branch (ja, chuk, in, ...); omit if unknown
        #[arg(long)]
        time_branch: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Elemental distribution for a birth chart
    Elements {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth double-hour branch; omit if unknown
        #[arg(long)]
        time_branch: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Decade Luck (Daeun) sequence
    Daeun {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Annual fortune pillars for consecutive years
    Annual {
        /// First calendar year
        #[arg(long)]
        year: i32,
        /// Number of consecutive years
        #[arg(long, default_value = "1")]
        count: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Ranked element recommendations from the weak elements
    Recommend {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth double-hour branch; omit if unknown
        #[arg(long)]
        time_branch: Option<String>,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Reference month (YYYY-MM) for season and active luck cycle
        #[arg(long)]
        as_of: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Preview a balance change on a five-element distribution
    Preview {
        /// Distribution as wood=30,fire=25,earth=20,metal=15,water=10
        #[arg(long)]
        distribution: String,
        /// Element to raise
        #[arg(long)]
        element: String,
        /// Percentage points to add
        #[arg(long, default_value = "5")]
        amount: f64,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Full analysis report: pillars, tally, luck cycles, recommendations
    Analyze {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth double-hour branch; omit if unknown
        #[arg(long)]
        time_branch: Option<String>,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Reference month (YYYY-MM) for season, age and annual fortunes
        #[arg(long)]
        as_of: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Structured report consumed by downstream collaborators.
#[derive(Serialize)]
struct AnalysisReport {
    birth_date: CivilDate,
    gender: Gender,
    pillars: FourPillars,
    tally: ElementTally,
    strong_element: ElementShare,
    weak_elements: Vec<ElementShare>,
    daeun: Vec<LuckCycleSegment>,
    active_daeun: Option<LuckCycleSegment>,
    annual_fortunes: Vec<AnnualFortunePillar>,
    age: i32,
    scores: Vec<ElementScore>,
}

fn parse_date(s: &str) -> CivilDate {
    let parts: Vec<&str> = s.split('-').collect();
    let numbers: Option<(i32, u32, u32)> = match parts.as_slice() {
        [y, m, d] => match (y.parse(), m.parse(), d.parse()) {
            (Ok(y), Ok(m), Ok(d)) => Some((y, m, d)),
            _ => None,
        },
        _ => None,
    };
    let Some((y, m, d)) = numbers else {
        eprintln!("Invalid date: {s}. Use YYYY-MM-DD.");
        std::process::exit(1);
    };
    match CivilDate::new(y, m, d) {
        Ok(date) => date,
        Err(e) => {
            eprintln!("Invalid date {s}: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_year_month(s: &str) -> (i32, u32) {
    let parts: Vec<&str> = s.split('-').collect();
    if let [y, m] = parts.as_slice() {
        if let (Ok(y), Ok(m)) = (y.parse::<i32>(), m.parse::<u32>()) {
            if (1..=12).contains(&m) {
                return (y, m);
            }
        }
    }
    eprintln!("Invalid reference month: {s}. Use YYYY-MM.");
    std::process::exit(1);
}

fn parse_time_branch(s: &Option<String>) -> Option<EarthlyBranch> {
    let name = s.as_deref()?;
    match EarthlyBranch::from_name(name) {
        Some(b) => Some(b),
        None => {
            eprintln!("Unknown time branch: {name}. Use ja, chuk, in, myo, ...");
            std::process::exit(1);
        }
    }
}

fn parse_gender(s: &str) -> Gender {
    match Gender::from_name(s) {
        Some(g) => g,
        None => {
            eprintln!("Unknown gender: {s}. Use male or female.");
            std::process::exit(1);
        }
    }
}

fn parse_element(s: &str) -> FiveElement {
    match FiveElement::from_name(s) {
        Some(e) => e,
        None => {
            eprintln!("Unknown element: {s}. Use wood, fire, earth, metal or water.");
            std::process::exit(1);
        }
    }
}

fn parse_distribution(s: &str) -> ElementDistribution {
    let mut values = [f64::NAN; 5];
    for entry in s.split(',') {
        let Some((name, value)) = entry.split_once('=') else {
            eprintln!("Invalid distribution entry: {entry}. Use name=value.");
            std::process::exit(1);
        };
        let element = parse_element(name.trim());
        match value.trim().parse::<f64>() {
            Ok(v) => values[element.index() as usize] = v,
            Err(_) => {
                eprintln!("Invalid percentage for {name}: {value}");
                std::process::exit(1);
            }
        }
    }
    if values.iter().any(|v| v.is_nan()) {
        eprintln!("Distribution must name all five elements.");
        std::process::exit(1);
    }
    ElementDistribution::new(values)
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_pillar(label: &str, pillar: &Pillar) {
    println!(
        "{label}: {pillar} ({}) - stem {}, branch {}",
        pillar.hanja(),
        pillar.stem_element().name(),
        pillar.branch_element().name()
    );
}

fn print_pillars(chart: &FourPillars) {
    print_pillar("Year ", &chart.year);
    print_pillar("Month", &chart.month);
    print_pillar("Day  ", &chart.day);
    match &chart.time {
        Some(t) => print_pillar("Time ", t),
        None => println!("Time : unknown"),
    }
}

fn print_tally(tally: &ElementTally) {
    for share in &tally.shares {
        println!(
            "{:<5} {} x{} ({}%)",
            share.element.name(),
            share.element.hanja(),
            share.count,
            share.percentage
        );
    }
    println!("Known slots: {}", tally.known_slots);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pillars {
            date,
            time_branch,
            json,
        } => {
            let date = parse_date(&date);
            let chart = four_pillars(&date, parse_time_branch(&time_branch));
            if json {
                println!("{}", to_json(&chart));
            } else {
                print_pillars(&chart);
            }
        }

        Commands::Elements {
            date,
            time_branch,
            json,
        } => {
            let date = parse_date(&date);
            let chart = four_pillars(&date, parse_time_branch(&time_branch));
            let tally = analyze_elements(&chart);
            if json {
                println!("{}", to_json(&tally));
            } else {
                print_tally(&tally);
                let strong = strong_element(&tally);
                println!("Strong: {}", strong.element.name());
                let weak = weak_elements(&tally);
                let weak_names: Vec<&str> =
                    weak.iter().map(|s| s.element.name()).collect();
                println!(
                    "Weak: {}",
                    if weak_names.is_empty() {
                        "none".to_string()
                    } else {
                        weak_names.join(", ")
                    }
                );
            }
        }

        Commands::Daeun { date, gender, json } => {
            let date = parse_date(&date);
            let gender = parse_gender(&gender);
            let chart = four_pillars(&date, None);
            let segments = calculate_daeun(&chart.month, gender, date.year);
            if json {
                println!("{}", to_json(&segments.to_vec()));
            } else {
                for seg in &segments {
                    println!(
                        "{:>5}  {} ({}) - {}",
                        seg.age_label(),
                        seg.pillar,
                        seg.pillar.hanja(),
                        seg.element.name()
                    );
                }
            }
        }

        Commands::Annual { year, count, json } => {
            let series = annual_fortune_series(year, count);
            if json {
                println!("{}", to_json(&series));
            } else {
                for f in &series {
                    println!(
                        "{}: {} ({}) - {}",
                        f.year,
                        f.pillar,
                        f.pillar.hanja(),
                        f.element.name()
                    );
                }
            }
        }

        Commands::Recommend {
            date,
            time_branch,
            gender,
            as_of,
            json,
        } => {
            let date = parse_date(&date);
            let gender = parse_gender(&gender);
            let (ref_year, ref_month) = parse_year_month(&as_of);

            let chart = four_pillars(&date, parse_time_branch(&time_branch));
            let tally = analyze_elements(&chart);
            let candidates: Vec<CandidateElement> = weak_elements(&tally)
                .into_iter()
                .map(CandidateElement::from)
                .collect();

            let segments = calculate_daeun(&chart.month, gender, date.year);
            let age = age_at(ref_year, date.year);
            let luck = active_segment(&segments, age).map(|s| s.element);

            let scored = score_candidates(&candidates, season_for_month(ref_month), luck);
            if json {
                println!("{}", to_json(&scored));
            } else if scored.is_empty() {
                println!("No weak elements; nothing to recommend.");
            } else {
                for s in &scored {
                    println!(
                        "{:<5} total {:>5.1} (deficiency {:.1}, season {:.0}, luck {:.0}, generating {:.0}) - fed by {}",
                        s.element.name(),
                        s.total,
                        s.breakdown.deficiency,
                        s.breakdown.season_bonus,
                        s.breakdown.luck_cycle_bonus,
                        s.breakdown.generating_bonus,
                        s.generating_element.name()
                    );
                }
            }
        }

        Commands::Preview {
            distribution,
            element,
            amount,
            json,
        } => {
            let dist = parse_distribution(&distribution);
            let element = parse_element(&element);
            let next = preview_balance_change(&dist, element, amount);
            if json {
                println!("{}", to_json(&next));
            } else {
                for e in saju_core::ALL_ELEMENTS {
                    println!("{:<5} {:>5.1} -> {:>5.1}", e.name(), dist.get(e), next.get(e));
                }
                println!("Total: {:.1}", next.total());
            }
        }

        Commands::Analyze {
            date,
            time_branch,
            gender,
            as_of,
            json,
        } => {
            let date = parse_date(&date);
            let gender = parse_gender(&gender);
            let (ref_year, ref_month) = parse_year_month(&as_of);

            let chart = four_pillars(&date, parse_time_branch(&time_branch));
            let tally = analyze_elements(&chart);
            let strong = strong_element(&tally);
            let weak = weak_elements(&tally);

            let segments = calculate_daeun(&chart.month, gender, date.year);
            let age = age_at(ref_year, date.year);
            let active = active_segment(&segments, age).copied();
            let annual = annual_fortune_series(ref_year, 2);

            let candidates: Vec<CandidateElement> = weak
                .iter()
                .copied()
                .map(CandidateElement::from)
                .collect();
            let scores = score_candidates(
                &candidates,
                season_for_month(ref_month),
                active.map(|s| s.element),
            );

            let report = AnalysisReport {
                birth_date: date,
                gender,
                pillars: chart,
                tally,
                strong_element: strong,
                weak_elements: weak,
                daeun: segments.to_vec(),
                active_daeun: active,
                annual_fortunes: annual,
                age,
                scores,
            };

            if json {
                println!("{}", to_json(&report));
            } else {
                print_pillars(&report.pillars);
                println!();
                print_tally(&report.tally);
                println!("Strong: {}", report.strong_element.element.name());
                let weak_names: Vec<&str> = report
                    .weak_elements
                    .iter()
                    .map(|s| s.element.name())
                    .collect();
                println!(
                    "Weak: {}",
                    if weak_names.is_empty() {
                        "none".to_string()
                    } else {
                        weak_names.join(", ")
                    }
                );
                println!();
                println!("Daeun (age {age}):");
                for seg in &report.daeun {
                    let marker = match &report.active_daeun {
                        Some(a) if a == seg => " *",
                        _ => "",
                    };
                    println!(
                        "{:>5}  {} - {}{marker}",
                        seg.age_label(),
                        seg.pillar,
                        seg.element.name()
                    );
                }
                println!();
                for f in &report.annual_fortunes {
                    println!("{}: {} - {}", f.year, f.pillar, f.element.name());
                }
                if !report.scores.is_empty() {
                    println!();
                    println!("Recommended elements:");
                    for s in &report.scores {
                        println!(
                            "{:<5} total {:>5.1} - fed by {}",
                            s.element.name(),
                            s.total,
                            s.generating_element.name()
                        );
                    }
                }
            }
        }
    }
}
