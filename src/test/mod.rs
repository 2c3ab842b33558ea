
pub use builders::*;

/// Content of `tests/samples/Method.Contracts/Method.Contracts.sln`
pub fn method_contracts_solution() -> &'static str {
    include_str!("../../tests/samples/Method.Contracts/Method.Contracts.sln")
}

/// Content of the `Method.Contracts` library project of the sample solution
pub fn method_contracts_project() -> &'static str {
    include_str!("../../tests/samples/Method.Contracts/Method.Contracts/Method.Contracts.csproj")
}
