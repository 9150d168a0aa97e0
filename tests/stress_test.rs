use gochan::{bounded, channel_select, try_channel_select, Channel, TryGetError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::thread;

// P producers, each with its own rendezvous channel; one consumer selects
// across all of them with a shuffled list every call. Checks exactly-once
// delivery and per-channel FIFO order under real contention.
#[test]
#[cfg_attr(miri, ignore)]
fn test_select_fan_in_conservation() {
    let producers = 8;
    let per = 200;
    let channels: Vec<Channel<(usize, usize)>> = (0..producers).map(|_| bounded(0)).collect();

    let mut handles = vec![];
    for (p, ch) in channels.iter().enumerate() {
        let tx = ch.clone();
        handles.push(thread::spawn(move || {
            for i in 0..per {
                tx.put((p, i));
            }
        }));
    }

    let mut rng = rand::thread_rng();
    let mut list = channels.clone();
    let mut next = vec![0usize; producers];
    for _ in 0..producers * per {
        list.shuffle(&mut rng);
        let (p, i) = channel_select(&list);
        assert_eq!(i, next[p], "out-of-order delivery from producer {p}");
        next[p] += 1;
    }

    for h in handles {
        h.join().unwrap();
    }
    assert!(next.iter().all(|&n| n == per));
    for ch in &channels {
        assert_eq!(ch.try_get(), Err(TryGetError::Empty));
    }
}

// Producers alternate blocking puts with non-blocking retry loops; consumers
// alternate blocking gets with non-blocking retry loops. Totals must balance
// exactly, with no value lost or duplicated.
#[test]
#[cfg_attr(miri, ignore)]
fn test_mixed_blocking_nonblocking_churn() {
    let producers = 4;
    let consumers = 4;
    let per = 1000;
    let c = bounded(8);

    let mut handles = vec![];
    for p in 0..producers {
        let tx = c.clone();
        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            for i in 0..per {
                let mut v = p * per + i;
                if rng.gen_bool(0.5) {
                    tx.put(v);
                } else {
                    loop {
                        match tx.try_put(v) {
                            Ok(()) => break,
                            Err(e) => {
                                v = e.into_inner();
                                thread::yield_now();
                            }
                        }
                    }
                }
            }
        }));
    }

    let mut collectors = vec![];
    for _ in 0..consumers {
        let rx = c.clone();
        collectors.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            let mut got = vec![];
            for _ in 0..producers * per / consumers {
                if rng.gen_bool(0.5) {
                    got.push(rx.get());
                } else {
                    loop {
                        match rx.try_get() {
                            Ok(v) => {
                                got.push(v);
                                break;
                            }
                            Err(TryGetError::Empty) => thread::yield_now(),
                        }
                    }
                }
            }
            got
        }));
    }

    for h in handles {
        h.join().unwrap();
    }
    let mut all: Vec<usize> = collectors
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    assert_eq!(all, (0..producers * per).collect::<Vec<_>>());
}

// Randomized mix of blocking and non-blocking selects against producers
// scattering values over shared channels. Any hand-off invariant violation
// panics a thread and fails the joins below.
#[test]
#[cfg_attr(miri, ignore)]
fn test_randomized_select_fuzz() {
    let producers = 4;
    let per = 500;
    let channels: Vec<Channel<usize>> = (0..4).map(|_| bounded(2)).collect();

    let mut handles = vec![];
    for p in 0..producers {
        let chans = channels.clone();
        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            for i in 0..per {
                let target = rng.gen_range(0..chans.len());
                chans[target].put(p * per + i);
            }
        }));
    }

    let mut rng = rand::thread_rng();
    let mut list = channels.clone();
    let mut all = Vec::with_capacity(producers * per);
    for _ in 0..producers * per {
        list.shuffle(&mut rng);
        if rng.gen_bool(0.3) {
            loop {
                match try_channel_select(&list) {
                    Ok(v) => {
                        all.push(v);
                        break;
                    }
                    Err(TryGetError::Empty) => thread::yield_now(),
                }
            }
        } else {
            all.push(channel_select(&list));
        }
    }

    for h in handles {
        h.join().unwrap();
    }
    all.sort_unstable();
    assert_eq!(all, (0..producers * per).collect::<Vec<_>>());
    for ch in &channels {
        assert_eq!(ch.try_get(), Err(TryGetError::Empty));
    }
}
