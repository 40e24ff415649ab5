use error_stack::Report;
use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::policy::staff_only;
use kernel::interface::query::{BookFilter, BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookAuthor, BookCover, BookDailyFee, BookId, BookInventory, BookTitle, DestructBook, User,
};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetAllBooksDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetAllBooksService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_all_books(
        &self,
        dto: GetAllBooksDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filter = BookFilter {
            title: dto.title,
            author: dto.author,
            limit: dto.limit,
            offset: dto.offset,
        };
        let books = self.book_query().find_all(&mut connection, &filter).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBooksService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let actor = User::from(dto.actor);
        staff_only(&actor, "perform this action")?;

        let mut connection = self.database_connection().transact().await?;

        let book = Book::new(
            BookId::new(Uuid::new_v4()),
            checked_title(dto.title)?,
            checked_author(dto.author)?,
            BookCover::new(dto.cover)?,
            checked_inventory(dto.inventory)?,
            checked_daily_fee(dto.daily_fee)?,
        );
        self.book_modifier().create(&mut connection, &book).await?;

        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let actor = User::from(dto.actor);
        staff_only(&actor, "perform this action")?;

        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("book")))?;

        let DestructBook {
            id,
            title,
            author,
            cover,
            inventory,
            daily_fee,
        } = book.into_destruct();
        let book = Book::new(
            id,
            match dto.title {
                Some(title) => checked_title(title)?,
                None => title,
            },
            match dto.author {
                Some(author) => checked_author(author)?,
                None => author,
            },
            match dto.cover {
                Some(cover) => BookCover::new(cover)?,
                None => cover,
            },
            match dto.inventory {
                Some(inventory) => checked_inventory(inventory)?,
                None => inventory,
            },
            match dto.daily_fee {
                Some(daily_fee) => checked_daily_fee(daily_fee)?,
                None => daily_fee,
            },
        );
        self.book_modifier().update(&mut connection, &book).await?;

        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where
    T: DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let actor = User::from(dto.actor);
        staff_only(&actor, "perform this action")?;

        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("book")))?;
        self.book_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteBookService for T where
    T: DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
}

fn checked_title(title: String) -> error_stack::Result<BookTitle, KernelError> {
    if title.trim().is_empty() {
        return Err(invalid_field("title", "This field may not be blank."));
    }
    Ok(BookTitle::new(title))
}

fn checked_author(author: String) -> error_stack::Result<BookAuthor, KernelError> {
    if author.trim().is_empty() {
        return Err(invalid_field("author", "This field may not be blank."));
    }
    Ok(BookAuthor::new(author))
}

fn checked_inventory(inventory: i32) -> error_stack::Result<BookInventory, KernelError> {
    if inventory < 0 {
        return Err(invalid_field(
            "inventory",
            "Ensure this value is greater than or equal to 0.",
        ));
    }
    Ok(BookInventory::new(inventory))
}

// The fee column is NUMERIC(5, 2); values are rejected the way the form
// layer words it rather than bounced off the column constraint.
fn checked_daily_fee(fee: Decimal) -> error_stack::Result<BookDailyFee, KernelError> {
    if fee < Decimal::ZERO {
        return Err(invalid_field(
            "daily_fee",
            "Ensure this value is greater than or equal to 0.",
        ));
    }
    if fee.scale() > 2 {
        return Err(invalid_field(
            "daily_fee",
            "Ensure that there are no more than 2 decimal places.",
        ));
    }
    if fee.trunc().mantissa().abs().to_string().len() > 3 {
        return Err(invalid_field(
            "daily_fee",
            "Ensure that there are no more than 3 digits before the decimal point.",
        ));
    }
    Ok(BookDailyFee::new(fee))
}

fn invalid_field(field: &'static str, message: &str) -> Report<KernelError> {
    Report::new(KernelError::InvalidField {
        field,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use kernel::prelude::entity::{
        Book, BookAuthor, BookCover, BookDailyFee, BookId, BookInventory, BookTitle,
    };
    use kernel::KernelError;

    use crate::service::mock::{staff, visitor, MockDatabase};
    use crate::service::{
        CreateBookService, DeleteBookService, GetAllBooksService, GetBookService, UpdateBookService,
    };
    use crate::transfer::{
        CreateBookDto, DeleteBookDto, GetAllBooksDto, GetBookDto, UpdateBookDto, UserDto,
    };

    fn seed_book(title: &str, author: &str) -> Book {
        Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new(title),
            BookAuthor::new(author),
            BookCover::Soft,
            BookInventory::new(2),
            BookDailyFee::new(Decimal::new(150, 2)),
        )
    }

    fn create_dto(actor: UserDto) -> CreateBookDto {
        CreateBookDto {
            actor,
            title: "A Wizard of Earthsea".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            cover: "HARD".to_string(),
            inventory: 3,
            daily_fee: Decimal::new(250, 2),
        }
    }

    #[tokio::test]
    async fn staff_creates_and_reads_back() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::new();

        let created = db.create_book(create_dto(staff())).await?;
        assert_eq!(created.title, "A Wizard of Earthsea");
        assert_eq!(created.cover, "HARD");

        let found = db.get_book(GetBookDto { id: created.id }).await?;
        assert_eq!(found.map(|book| book.id), Some(created.id));
        Ok(())
    }

    #[tokio::test]
    async fn create_is_staff_only() {
        let db = MockDatabase::new();
        let report = db.create_book(create_dto(visitor())).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Forbidden("perform this action")
        ));
    }

    #[tokio::test]
    async fn create_rejects_bad_fields() {
        let db = MockDatabase::new();

        let mut dto = create_dto(staff());
        dto.title = "  ".to_string();
        let report = db.create_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidField { field: "title", .. }
        ));

        let mut dto = create_dto(staff());
        dto.cover = "SPIRAL".to_string();
        let report = db.create_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidField { field: "cover", .. }
        ));

        let mut dto = create_dto(staff());
        dto.inventory = -1;
        let report = db.create_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidField {
                field: "inventory",
                ..
            }
        ));

        let mut dto = create_dto(staff());
        dto.daily_fee = Decimal::new(12345, 3);
        let report = db.create_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidField {
                field: "daily_fee",
                ..
            }
        ));

        let mut dto = create_dto(staff());
        dto.daily_fee = Decimal::new(123450, 2);
        let report = db.create_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidField {
                field: "daily_fee",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn update_merges_partial_fields() -> error_stack::Result<(), KernelError> {
        let book = seed_book("The Dispossessed", "Ursula K. Le Guin");
        let id = *book.id().as_ref();
        let db = MockDatabase::new().with_book(book);

        let updated = db
            .update_book(UpdateBookDto {
                actor: staff(),
                id,
                title: None,
                author: None,
                cover: None,
                inventory: Some(7),
                daily_fee: None,
            })
            .await?;
        assert_eq!(updated.title, "The Dispossessed");
        assert_eq!(updated.inventory, 7);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_book_is_not_found() {
        let db = MockDatabase::new();
        let report = db
            .update_book(UpdateBookDto {
                actor: staff(),
                id: Uuid::new_v4(),
                title: None,
                author: None,
                cover: None,
                inventory: None,
                daily_fee: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::NotFound("book")
        ));
    }

    #[tokio::test]
    async fn anyone_lists_with_filters() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::new()
            .with_book(seed_book("The Tombs of Atuan", "Ursula K. Le Guin"))
            .with_book(seed_book("Solaris", "Stanislaw Lem"));

        let all = db
            .get_all_books(GetAllBooksDto {
                title: None,
                author: None,
                limit: Default::default(),
                offset: Default::default(),
            })
            .await?;
        assert_eq!(all.len(), 2);

        let lem = db
            .get_all_books(GetAllBooksDto {
                title: None,
                author: Some("lem".to_string()),
                limit: Default::default(),
                offset: Default::default(),
            })
            .await?;
        assert_eq!(lem.len(), 1);
        assert_eq!(lem[0].title, "Solaris");
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_staff_only() -> error_stack::Result<(), KernelError> {
        let book = seed_book("The Farthest Shore", "Ursula K. Le Guin");
        let id = *book.id().as_ref();
        let db = MockDatabase::new().with_book(book);

        let report = db
            .delete_book(DeleteBookDto { actor: visitor(), id })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Forbidden(_)));

        db.delete_book(DeleteBookDto { actor: staff(), id }).await?;
        let found = db.get_book(GetBookDto { id }).await?;
        assert!(found.is_none());
        Ok(())
    }
}
