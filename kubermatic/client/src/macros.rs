//! Declarative builders for parameter structs and outcome enums.
//!
//! Every operation is the same three pieces: a parameter struct, an outcome
//! enum dispatching on the status code, and a facade method. The first two
//! are expanded from the compact descriptions in each resource module.

/// Declares an operation's parameter struct.
///
/// Each field reads `<location> <name>: <type> = "<wire name>" => <with>, <set>;`
/// where the location is one of:
///
/// - `path`: required, percent-encoded into the URL; an empty value fails
///   the call before anything is sent
/// - `query`: stored as `Option<type>` and skipped while unset
/// - `header`: stored as `Option<type>` and skipped while unset
/// - `body`: serialized with the operation's request media type
///
/// The struct also carries the uniform [`CallOptions`](kubermatic_runtime::CallOptions)
/// and gets `new`, `Default`, one fluent `with_*` and one `set_*` setter per field.
macro_rules! operation_params {
    (@field path $ty:ty) => { $ty };
    (@field query $ty:ty) => { Option<$ty> };
    (@field header $ty:ty) => { Option<$ty> };
    (@field body $ty:ty) => { $ty };

    (@setters path $field:ident $ty:ty, $with:ident, $set:ident) => {
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = value.into();
            self
        }

        pub fn $set(&mut self, value: impl Into<$ty>) {
            self.$field = value.into();
        }
    };
    (@setters query $field:ident $ty:ty, $with:ident, $set:ident) => {
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }

        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }
    };
    (@setters header $field:ident $ty:ty, $with:ident, $set:ident) => {
        operation_params!(@setters query $field $ty, $with, $set);
    };
    (@setters body $field:ident $ty:ty, $with:ident, $set:ident) => {
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = value;
            self
        }

        pub fn $set(&mut self, value: $ty) {
            self.$field = value;
        }
    };

    (@write path, $request:ident, $errors:ident, $value:expr, $wire:literal) => {
        $errors.record($request.set_path_param($wire, $value));
    };
    (@write query, $request:ident, $errors:ident, $value:expr, $wire:literal) => {
        if let Some(value) = $value {
            $request.set_query_param($wire, value.to_string());
        }
    };
    (@write header, $request:ident, $errors:ident, $value:expr, $wire:literal) => {
        if let Some(value) = $value {
            $errors.record($request.set_header_param($wire, value));
        }
    };
    (@write body, $request:ident, $errors:ident, $value:expr, $wire:literal) => {
        $errors.record($request.set_body_param($value));
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $loc:ident $field:ident : $ty:ty = $wire:literal => $with:ident, $set:ident;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: operation_params!(@field $loc $ty),
            )*
            /// Timeout and HTTP client override for this call.
            pub options: ::kubermatic_runtime::CallOptions,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(operation_params!(@setters $loc $field $ty, $with, $set);)*
        }

        impl ::kubermatic_runtime::WriteRequest for $name {
            #[allow(unused_variables, unused_mut)]
            fn write_to_request(
                &self,
                request: &mut ::kubermatic_runtime::ClientRequest,
                _formats: &::kubermatic_runtime::Formats,
            ) -> Result<(), ::kubermatic_runtime::CompositeError> {
                let mut errors = ::kubermatic_runtime::CompositeError::new();
                $(operation_params!(@write $loc, request, errors, &self.$field, $wire);)*
                errors.into_result()
            }
        }

        impl ::kubermatic_runtime::OperationParams for $name {
            fn call_options(&self) -> &::kubermatic_runtime::CallOptions {
                &self.options
            }

            fn call_options_mut(&mut self) -> &mut ::kubermatic_runtime::CallOptions {
                &mut self.options
            }
        }
    };
}

/// Declares an operation's outcome enum and its status-code reader.
///
/// The first line names the declared success code and its payload type, or
/// `empty` when the body is never read. The remaining lines map each declared
/// error code to a variant, optionally carrying a decoded payload. Any other
/// code lands in the `Default` variant; an undeclared 2xx becomes an
/// unexpected-success error.
///
/// ```rust,ignore
/// operation_outcome! {
///     pub enum CreateIpamPoolError("createIPAMPool") {
///         201 => empty;
///         401 => Unauthorized,
///         403 => Forbidden,
///         409 => Conflict(ErrorResponse),
///     }
/// }
/// ```
macro_rules! operation_outcome {
    (@success empty, $response:ident, $formats:ident) => {
        Ok(::kubermatic_runtime::Reply::Success(()))
    };
    (@success payload, $response:ident, $formats:ident) => {
        Ok(::kubermatic_runtime::Reply::Success($response.read_payload($formats)?))
    };

    (
        @impl [$($meta:tt)*] $vis:vis $name:ident $op:literal $ok:literal [$success:ty] $mode:ident {
            $($code:literal => $variant:ident $(($payload:ty))?),* $(,)?
        }
    ) => {
        $($meta)*
        #[derive(Debug, ::thiserror::Error)]
        $vis enum $name {
            $(
                #[error("[{code}] {op}{variant}", code = $code, op = $op, variant = stringify!($variant))]
                $variant $(($payload))?,
            )*
            /// A status code the operation does not declare.
            #[error("{op}: {0}", op = $op)]
            Default(#[from] $crate::DefaultResponse),
        }

        impl ::kubermatic_runtime::ReadResponse for $name {
            type Success = $success;

            fn read_response(
                response: &::kubermatic_runtime::ClientResponse,
                formats: &::kubermatic_runtime::Formats,
            ) -> Result<::kubermatic_runtime::Reply<Self::Success, Self>, ::kubermatic_runtime::ApiError> {
                match response.code() {
                    $ok => operation_outcome!(@success $mode, response, formats),
                    $(
                        $code => Ok(::kubermatic_runtime::Reply::Failure(
                            Self::$variant $((response.read_payload::<$payload>(formats)?))?
                        )),
                    )*
                    _ => Ok(::kubermatic_runtime::Reply::from_default(
                        ::kubermatic_runtime::DefaultResponse::read(response, formats)?,
                    )),
                }
            }

            fn code(&self) -> u16 {
                match self {
                    $(Self::$variant { .. } => $code,)*
                    Self::Default(default) => default.code(),
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($op:literal) {
            $ok:literal => empty;
            $($rest:tt)*
        }
    ) => {
        operation_outcome!(@impl [$(#[$meta])*] $vis $name $op $ok [()] empty { $($rest)* });
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($op:literal) {
            $ok:literal => $success:ty;
            $($rest:tt)*
        }
    ) => {
        operation_outcome!(@impl [$(#[$meta])*] $vis $name $op $ok [$success] payload { $($rest)* });
    };
}
