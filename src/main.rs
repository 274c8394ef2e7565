use feedforward_net::prelude::*;
use log::info;
use ndarray::array;

const EPSILON: f32 = 0.9;
const DEFAULT_PASSES: usize = 2000;

/// XOR truth table: (x0, x1, expected)
const TEACH_SUIT: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let passes = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_PASSES,
    };
    let layers = [Layer::new(2), Layer::new(4), Layer::new(1)];
    let mut net = match args.next() {
        Some(arg) => Network::with_seed(Activation::Sigmoid, &layers, arg.parse::<u64>()?)?,
        None => Network::new(Activation::Sigmoid, &layers)?,
    };
    net.summary();

    let report_every = (passes / 10).max(1);
    for pass in 0..passes {
        let mut pass_error = 0.0;
        for row in TEACH_SUIT.iter() {
            let errors = net.correct(EPSILON, array![row[0], row[1]].view(), array![row[2]].view())?;
            pass_error += errors.sum();
        }
        if pass % report_every == 0 || pass + 1 == passes {
            info!(
                "pass {:>6}: mean squared error {:.6}",
                pass,
                pass_error / TEACH_SUIT.len() as f32
            );
        }
    }

    for row in TEACH_SUIT.iter() {
        let output = net.evaluate(array![row[0], row[1]].view())?;
        println!(
            "Data: {{{},{}}} ({}) -> Result: {}",
            row[0], row[1], row[2], output[0]
        );
    }

    Ok(())
}
