use replay_injector::{init_from_env, inject};
use std::thread;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let injector = init_from_env();
    log::debug!("Default injector: {:?}", injector);

    let n: usize = std::env::args()
        .nth(1)
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or(8);
    let handles: Vec<_> = (0..n)
        .map(|i| {
            thread::spawn(move || {
                let msg = format!("i={}", i);
                inject(Some(msg.as_bytes()));
                println!("{}", msg);
            })
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    }
    Ok(())
}
