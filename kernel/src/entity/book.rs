mod author;
mod cover;
mod daily_fee;
mod id;
mod inventory;
mod title;

pub use self::{author::*, cover::*, daily_fee::*, id::*, inventory::*, title::*};
use destructure::{Destructure, Mutation};

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    cover: BookCover,
    inventory: BookInventory,
    daily_fee: BookDailyFee,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        cover: BookCover,
        inventory: BookInventory,
        daily_fee: BookDailyFee,
    ) -> Self {
        Self {
            id,
            title,
            author,
            cover,
            inventory,
            daily_fee,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn cover(&self) -> &BookCover {
        &self.cover
    }

    pub fn inventory(&self) -> &BookInventory {
        &self.inventory
    }

    pub fn daily_fee(&self) -> &BookDailyFee {
        &self.daily_fee
    }
}
