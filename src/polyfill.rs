#[macro_use]
mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "tracing")] {
            macro_rules! trace {
                ($($arg:tt)+) => {
                    tracing::trace!(target: "cmpheap", $($arg)+)
                };
            }
        } else {
            macro_rules! trace {
                ($($arg:tt)+) => {};
            }
        }
    }

    cfg_if! {
        if #[cfg(feature = "exact_size_is_empty")] {
            pub use core::iter::ExactSizeIterator as ExactSizeIsEmpty;
        } else {
            #[allow(dead_code)]
            pub trait ExactSizeIsEmpty: ExactSizeIterator {
                fn is_empty(&self) -> bool {
                    self.len() == 0
                }
            }

            impl<I: ExactSizeIterator> ExactSizeIsEmpty for I {}
        }
    }
}

#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use definitions::ExactSizeIsEmpty;
