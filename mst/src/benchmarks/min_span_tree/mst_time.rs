// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::{fs, io, process};
use std::path::Path;
use std::time::Duration;

use clap::Parser;

use mst::{DefWeight, Edge, EngineConfig, EngineError, Graph, KruskalEngine, Reporter};
use mst::benchmarks::min_span_tree::check::{check, total_weight};
use mst::common::fixture::reference_graph;
use mst::common::timer::{time_loop, Timer};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// the output filename
    #[arg(short, long, required = false, default_value_t = ("").to_string())]
    ofname: String,

    /// the number of rounds to execute the benchmark
    #[arg(short, long, default_value_t = 1)]
    rounds: usize,

    /// the most edges the heap may hold (defaults to the graph's edge count)
    #[arg(long)]
    heap_capacity: Option<usize>,
}

struct Console;

impl Reporter<DefWeight> for Console {
    fn accept(&mut self, e: &Edge) {
        println!("edge ({},{}) {} selected", e.start, e.end, e.weight);
    }

    fn finish(&mut self, accepted: usize) {
        println!("accepted {accepted} edges");
    }
}

fn round(engine: &mut KruskalEngine, timer: &mut Timer) -> Result<(), EngineError> {
    engine.restart();
    timer.start();
    engine.load()?;
    timer.next("load");
    engine.select(&mut ())?;
    timer.next("select");
    timer.stop();
    Ok(())
}

pub fn run(g: &Graph, config: &EngineConfig, rounds: usize)
    -> Result<(Vec<Edge>, Duration), EngineError>
{
    let mut engine = KruskalEngine::new(g, config);
    let mut timer = Timer::new("mst");
    let mut status = Ok(());

    let mean = time_loop("mst", rounds, |_| {
        if status.is_ok() { status = round(&mut engine, &mut timer); }
    });
    status?;
    Ok((engine.into_edges(), mean))
}

fn write_edges<P: AsRef<Path>>(es: &[Edge], of: P) -> io::Result<()> {
    let s: Vec<String> = es.iter().map(Edge::to_string).collect();
    fs::write(of, s.join("\n"))
}

fn main() {
    let args = Args::parse();
    let g = reference_graph();
    let config = EngineConfig { heap_capacity: args.heap_capacity };

    println!("Kruskal minimum spanning tree");
    if let Err(e) = mst::run_with(&g, &config, &mut Console) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let (r, d) = match run(&g, &config, args.rounds) {
        Ok(rd) => rd,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if !args.ofname.is_empty() {
        if let Err(e) = write_edges(&r, &args.ofname) {
            eprintln!("cannot write to {}: {e}", args.ofname);
            process::exit(1);
        }
    }
    println!("total weight: {}", total_weight(&r));
    println!("mean:  {:?}", d);

    if check(&g, &r) { println!("OK"); }
    else { println!("ERR"); process::exit(1); }
}
