use async_trait::async_trait;

/// A single application operation: one input, one output, one error type.
///
/// Application components expose their cacheable operations as use cases so
/// the cache layer can wrap `execute` without knowing what it computes.
#[async_trait]
pub trait UseCase<In, Out, Err>: Send + Sync
where
    In: Send + 'static,
    Out: Send + 'static,
    Err: Send + 'static,
{
    async fn execute(&self, input: In) -> Result<Out, Err>;
}

#[async_trait]
pub trait UseCaseValidatable<In, Out, Err>: UseCase<In, Out, Err> + Send + Sync
where
    // `validate` borrows the input across an await point
    In: Send + Sync + 'static,
    Out: Send + 'static,
    Err: Send + 'static,
{
    async fn validate(&self, input: &In) -> Result<(), Err>;

    async fn validate_and_execute(&self, input: In) -> Result<Out, Err> {
        self.validate(&input).await?;
        self.execute(input).await
    }
}
