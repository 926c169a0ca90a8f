use clap::Parser;
use dreidel::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level());
    let sweep = args.sweep();
    sweep.validate()?;
    let ref mut rng = args.rng();
    for (players, bank) in sweep.grid() {
        let summaries = sweep.batch(players, bank, rng)?;
        for summary in summaries.iter() {
            match args.json {
                true => println!("{}", summary.json()),
                false => println!("{}", summary),
            }
        }
        if sweep.trials > 1 {
            let tally = Tally::from(summaries.as_slice());
            match args.json {
                true => println!("{}", tally.json()),
                false => println!("{}", tally),
            }
        }
    }
    Ok(())
}
