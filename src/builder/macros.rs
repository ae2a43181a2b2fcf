//! Macros for writing transition matrices in source.

/// Build a [`TransitionMatrix`](crate::matrix::TransitionMatrix) from a
/// visual 2-D table.
///
/// The first bracketed row is the header: `_` followed by the states. Every
/// following row is a signal followed by one cell per state column, where
/// `_` marks "no transition". A signal row starting with `_` is skipped.
/// Expands to `Result<TransitionMatrix<_, _>, ConfigurationError>`.
///
/// # Example
///
/// ```
/// use stop_fsm::transition_matrix;
///
/// let matrix = transition_matrix! {
///     [ _      , "locked"   , "unlocked" ]
///     [ "coin" , "unlocked" , _          ]
///     [ "push" , _          , "locked"   ]
/// }
/// .unwrap();
///
/// assert_eq!(matrix.states(), ["locked", "unlocked"]);
/// assert_eq!(matrix.signals(), ["coin", "push"]);
/// assert_eq!(matrix.target(&"unlocked", &"push"), Some(&"locked"));
/// ```
#[macro_export]
macro_rules! transition_matrix {
    (
        [ _ $(, $state:expr)* $(,)? ]
        $( [ $($row:tt)* ] )*
    ) => {
        $crate::matrix::TransitionMatrix::from_rows(::std::vec![
            ::std::vec![
                $crate::matrix::MatrixCell::Empty
                $(, $crate::matrix::MatrixCell::State($state))*
            ]
            $(, $crate::__matrix_row!($($row)*))*
        ])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __matrix_row {
    (_ $(, $($cells:tt)*)?) => {
        $crate::__matrix_cells!([$crate::matrix::MatrixCell::Empty] $($($cells)*)?)
    };
    ($signal:expr $(, $($cells:tt)*)?) => {
        $crate::__matrix_cells!([$crate::matrix::MatrixCell::Signal($signal)] $($($cells)*)?)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __matrix_cells {
    ([$($out:expr),*]) => {
        ::std::vec![$($out),*]
    };
    ([$($out:expr),*] _ $(, $($rest:tt)*)?) => {
        $crate::__matrix_cells!([$($out,)* $crate::matrix::MatrixCell::Empty] $($($rest)*)?)
    };
    ([$($out:expr),*] $cell:expr $(, $($rest:tt)*)?) => {
        $crate::__matrix_cells!([$($out,)* $crate::matrix::MatrixCell::State($cell)] $($($rest)*)?)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Transition;
    use crate::engine::ConfigurationError;
    use crate::matrix::MatrixCell::{Empty, Signal, State};
    use crate::matrix::TransitionMatrix;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    #[test]
    fn macro_matches_explicit_rows() {
        let from_macro = transition_matrix! {
            [ _      , "locked"   , "unlocked" ]
            [ "coin" , "unlocked" , _          ]
            [ "push" , _          , "locked"   ]
        }
        .unwrap();

        let explicit = TransitionMatrix::from_rows(vec![
            vec![Empty, State("locked"), State("unlocked")],
            vec![Signal("coin"), State("unlocked"), Empty],
            vec![Signal("push"), Empty, State("locked")],
        ])
        .unwrap();

        assert_eq!(from_macro, explicit);
    }

    #[test]
    fn macro_accepts_paths_and_trailing_commas() {
        let matrix = transition_matrix! {
            [ _, Light::Red, Light::Green, Light::Yellow, ]
            [ "tick", Light::Green, Light::Yellow, Light::Red, ]
        }
        .unwrap();

        assert_eq!(matrix.states(), [Light::Red, Light::Green, Light::Yellow]);
        assert_eq!(
            matrix.transitions()[2],
            Transition::new(Light::Yellow, "tick", Light::Red)
        );
    }

    #[test]
    fn macro_skips_rows_without_signal() {
        let matrix = transition_matrix! {
            [ _     , 1 , 2 ]
            [ _     , 2 , 1 ]
            [ 'x'   , 2 , _ ]
        }
        .unwrap();

        assert_eq!(matrix.signals(), ['x']);
        assert_eq!(matrix.transitions(), [Transition::new(1, 'x', 2)]);
    }

    #[test]
    fn macro_rows_may_be_short() {
        let matrix = transition_matrix! {
            [ _    , "a" , "b" ]
            [ "go" , "b" ]
            [ "stay" ]
        }
        .unwrap();

        assert_eq!(matrix.signals(), ["go", "stay"]);
        assert_eq!(matrix.transitions().len(), 1);
    }

    #[test]
    fn macro_with_header_only() {
        let result: Result<TransitionMatrix<&str, &str>, ConfigurationError> = transition_matrix! {
            [ _, "idle" ]
        };

        assert_eq!(result.unwrap().states(), ["idle"]);
    }
}
