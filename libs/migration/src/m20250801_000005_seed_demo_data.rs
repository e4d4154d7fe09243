use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(
            r#"
            INSERT INTO users (name, email, phone, birth_date, password)
            VALUES
                ('Maria Brown', 'maria@example.com', '988888888', '2001-07-25', 'maria123'),
                ('Alex Green', 'alex@example.com', '977777777', '1987-12-13', 'alex123')
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            INSERT INTO categories (name)
            VALUES ('Livros'), ('Eletrônicos'), ('Computadores')
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            INSERT INTO products (name, description, price, img_url, rating, specifications)
            VALUES
                ('The Lord of the Rings', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 90.5,
                 'https://img.example.com/1-big.jpg', 4.7, 'Hardcover, 1178 pages'),
                ('Smart TV', 'Nulla eu imperdiet purus. Maecenas ante.', 2190.0,
                 'https://img.example.com/2-big.jpg', 4.5, '55 inch, 4K, HDR10'),
                ('Macbook Pro', 'Nam eleifend maximus tortor, at mollis.', 1250.0,
                 'https://img.example.com/3-big.jpg', 4.8, 'Apple M1, 16GB RAM'),
                ('PC Gamer', 'Donec aliquet odio ac rhoncus cursus.', 1200.0,
                 'https://img.example.com/4-big.jpg', 4.6, 'i7, 16GB, RTX'),
                ('Rails for Dummies', 'Cras fringilla convallis sem vel faucibus.', 100.99,
                 'https://img.example.com/5-big.jpg', 4.1, 'Paperback, 492 pages')
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            INSERT INTO product_categories (product_id, category_id)
            VALUES (1, 1), (2, 2), (3, 2), (3, 3), (4, 2), (4, 3), (5, 1)
            ON CONFLICT DO NOTHING
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            INSERT INTO orders (moment, status, client_id)
            VALUES
                ('2025-06-20T19:53:07Z', 'paid', 1),
                ('2025-06-29T03:42:10Z', 'waiting_payment', 2),
                ('2025-07-22T15:21:22Z', 'waiting_payment', 1)
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, price)
            VALUES
                (1, 1, 2, 90.5),
                (1, 3, 1, 1250.0),
                (2, 3, 1, 1250.0),
                (3, 5, 2, 100.99)
            ON CONFLICT DO NOTHING
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            INSERT INTO payments (moment, order_id)
            VALUES ('2025-06-20T21:53:07Z', 1)
            ON CONFLICT (order_id) DO NOTHING
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("DELETE FROM payments").await?;
        conn.execute_unprepared("DELETE FROM order_items").await?;
        conn.execute_unprepared("DELETE FROM orders").await?;
        conn.execute_unprepared("DELETE FROM product_categories").await?;
        conn.execute_unprepared("DELETE FROM products").await?;
        conn.execute_unprepared("DELETE FROM categories").await?;
        conn.execute_unprepared("DELETE FROM users").await?;

        Ok(())
    }
}
