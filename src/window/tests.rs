use super::{
    source::{IterSource, RestartableSource, SliceSource},
    *,
};
use core::cell::Cell;
use rand::Rng;

#[track_caller]
fn assert_window<S: Source>(window: &SlidingWindow<S>, expected: &[S::Item])
where
    S::Item: PartialEq + fmt::Debug,
{
    assert_eq!(window.window_size(), expected.len());
    for (index, item) in expected.iter().enumerate() {
        assert_eq!(window.get(index as isize), Ok(item));
    }
}

#[test]
fn slides_by_one() {
    let mut window = (1..=10).sliding_window(3).unwrap();
    assert_window(&window, &[1, 2, 3]);

    assert_eq!(window.slide_next(), Ok(true));
    assert_window(&window, &[2, 3, 4]);

    for _ in 0..6 {
        assert_eq!(window.slide_next(), Ok(true));
    }
    assert_window(&window, &[8, 9, 10]);

    assert_eq!(window.slide_next(), Ok(false));
    assert_window(&window, &[8, 9, 10]);
    assert_eq!(window.to_vec(), vec![8, 9, 10]);
}

#[test]
fn index_out_of_range() {
    let window = (1..=10).sliding_window(3).unwrap();
    for index in [-1, -100, 3, 4, isize::MAX, isize::MIN] {
        assert_eq!(
            window.get(index),
            Err(Error::OutOfRange { name: "index" }),
            "index {}",
            index
        );
    }
}

#[test]
fn negative_size_fails() {
    assert_eq!(
        (1..=10).sliding_window(-1).err(),
        Some(Error::OutOfRange {
            name: "window_size"
        })
    );
}

#[test]
fn zero_size() {
    let mut window = (1..=3).sliding_window(0).unwrap();
    assert_eq!(window.window_size(), 0);
    assert!(window.is_empty());
    assert_eq!(window.get(0), Err(Error::OutOfRange { name: "index" }));

    assert_eq!(window.slide_next(), Ok(true));
    assert!(window.is_empty());
    assert_eq!(window.get(0), Err(Error::OutOfRange { name: "index" }));
}

#[test]
fn short_source() {
    let mut window = [1, 2].sliding_window(4).unwrap();
    assert_eq!(window.len(), 2);
    assert_eq!(window.get(1), Ok(&2));
    assert_eq!(window.get(2), Err(Error::InvalidOperation));
    assert_eq!(window.get(4), Err(Error::OutOfRange { name: "index" }));
    assert_eq!(window.slide_next(), Ok(false));
    assert_eq!(window.to_vec(), vec![1, 2]);
}

#[test]
fn fills_eagerly_and_no_further() {
    let pulled = Cell::new(0);
    let iter = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
    let mut window = iter.sliding_window(5).unwrap();
    assert_eq!(pulled.get(), 5);
    window.slide_next().unwrap();
    assert_eq!(pulled.get(), 6);
}

#[test]
fn release() {
    let mut window = (1..=10).sliding_window(3).unwrap();
    assert!(!window.is_released());
    window.release();
    assert!(window.is_released());
    assert_eq!(window.get(0), Err(Error::Disposed));
    assert_eq!(window.slide_next(), Err(Error::Disposed));
    assert_eq!(window.reset(), Err(Error::Disposed));
    assert_eq!(window.iter().count(), 0);

    // second release is a no-op
    window.release();
    assert!(window.is_released());
}

#[test]
fn release_drops_source() {
    struct Tracked<'a>(&'a Cell<bool>);

    impl Source for Tracked<'_> {
        type Item = u8;

        fn pull(&mut self) -> Option<u8> {
            Some(0)
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    let dropped = Cell::new(false);
    let mut window = SlidingWindow::new(Tracked(&dropped), 2).unwrap();
    assert!(!dropped.get());
    window.release();
    assert!(dropped.get());

    let dropped = Cell::new(false);
    {
        let _window = SlidingWindow::new(Tracked(&dropped), 2).unwrap();
    }
    assert!(dropped.get());
}

#[test]
fn reset_unsupported() {
    assert!(!IterSource::new(0..1).can_restart());
    let mut window = (1..=10).sliding_window(3).unwrap();
    window.slide_next().unwrap();
    assert_eq!(window.reset(), Err(Error::NotSupported));
    assert_window(&window, &[2, 3, 4]);
}

#[test]
fn reset_does_not_refill() {
    let data = [1, 2, 3, 4, 5];
    let source = SliceSource::new(&data);
    assert!(source.can_restart());
    let mut window = SlidingWindow::new(source.clone(), 3).unwrap();
    window.slide_next().unwrap();
    window.slide_next().unwrap();
    assert_window(&window, &[3, 4, 5]);

    let mut rewound = source;
    rewound.pull();
    rewound.pull();
    assert_eq!(rewound.position(), 2);
    rewound.restart().unwrap();
    assert_eq!(rewound.position(), 0);
    assert_eq!(rewound.pull(), Some(1));

    assert_eq!(window.reset(), Ok(()));
    assert!(window.is_empty());
    assert_eq!(window.get(0), Err(Error::InvalidOperation));

    for _ in 0..window.window_size() {
        assert_eq!(window.slide_next(), Ok(true));
    }
    assert_window(&window, &[1, 2, 3]);
}

#[test]
fn reset_restartable_iterator() {
    let source = RestartableSource::new(b"abcdef".iter().copied());
    assert!(source.can_restart());
    let mut window = SlidingWindow::new(source, 2).unwrap();
    while window.slide_next().unwrap() {}
    assert_window(&window, b"ef");

    window.reset().unwrap();
    window.slide_next().unwrap();
    window.slide_next().unwrap();
    assert_window(&window, b"ab");
}

#[test]
fn boxed_source() {
    let source: Box<dyn Source<Item = i32>> = Box::new(SliceSource::new(&[7, 8, 9]));
    let mut window = SlidingWindow::new(source, 2).unwrap();
    assert!(window.slide_next().unwrap());
    assert_window(&window, &[8, 9]);
    assert!(window.reset().is_ok());
}

#[test]
fn iter_oldest_first() {
    let mut window = (0..10).sliding_window(4).unwrap();
    for _ in 0..3 {
        window.slide_next().unwrap();
    }
    assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    assert_eq!(window.iter().rev().copied().collect::<Vec<_>>(), vec![6, 5, 4, 3]);
    assert_eq!(
        format!("{:?}", window),
        "SlidingWindow { window_size: 4, released: false, items: [3, 4, 5, 6] }"
    );
}

#[test]
fn random() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let len = rng.random_range(0..200);
        let data = (0..len).map(|_| rng.random::<u32>()).collect::<Vec<_>>();
        let size = rng.random_range(0..=len);

        let mut window = data.iter().copied().sliding_window(size as isize).unwrap();
        let mut offset = 0;
        loop {
            assert_eq!(window.to_vec(), &data[offset..offset + size]);
            for index in 0..size {
                assert_eq!(window.get(index as isize), Ok(&data[offset + index]));
            }
            if !window.slide_next().unwrap() {
                break;
            }
            offset += 1;
        }
        assert_eq!(offset + size, len.max(size));
    }
}
