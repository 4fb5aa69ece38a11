/*!
# The Language

A program is a list of words separated by whitespace. Line breaks and
indentation only matter to the reader. Words are not case sensitive and
everything from `#` to the end of a line is a comment.

```text
LOOP 4        # walk a square
  MOVE
  RIGHT
END
```

## Words

There are four kinds of word plus unsigned integers.

 * Actions change the robot: `MOVE`, `LEFT`, `RIGHT`, `RTURN`, `PICK`, `OPEN`.
 * Control words shape the program: `LOOP`, `WHILE`, `IF`, `END`.
 * Sensors answer questions: `FRONT`, `KEY`, `DOOR`, `EXIT`.
 * State words set or clear the single flag: `SET`, `CLR`.

A program may use at most twenty different words. Integers do not count
toward the limit and may appear anywhere, though only `LOOP` and `WAIT`
give them meaning. A stray integer does nothing when reached.

## Sensors

`FRONT` is true when the tile ahead is not a wall. `KEY`, `DOOR` and `EXIT`
look at the tile under the robot. A sensor is only valid directly after
`IF` or `WHILE`; reaching one anywhere else stops the program.

The grid is sparse. A coordinate with no tile counts as a wall when the
robot tries to walk into it and as plain floor when the robot stands on it.

## Blocks

`LOOP`, `WHILE` and `IF` each open a block closed by the next unmatched
`END`. A block without an `END` is refused before the program runs. An `END`
that closes nothing is ignored.

## Escaping

After every step that moves the robot, it escapes if it stands on an exit,
or on a door it has opened. A program also stops when it runs off the end,
or after ten thousand steps.

## Errors

| Error | When |
|-------|------|
| `INVALID TOKEN` | A word is not in the language. |
| `TOO MANY DISTINCT TOKENS` | More than twenty different words. |
| `BLOCK WITHOUT END` | `LOOP`, `WHILE` or `IF` has no `END`. |
| `SENSOR WITHOUT IF OR WHILE` | A sensor was reached on its own. |
| `LOOP WITHOUT COUNT` | `LOOP` is not followed by an integer. |
| `CONDITION WITHOUT SENSOR` | `IF` or `WHILE` is not followed by a sensor. |
| `UNKNOWN OPCODE` | A modifier word of the extended set was reached. |
| `CONTROL STACK OVERFLOW` | Blocks nested too deep, or too many `SAVE`s. |
| `INVALID MAP` | A map file has an unknown cell or more than one robot. |
| `FILE NOT FOUND` | The `vault` executable could not open a file. |

*/
